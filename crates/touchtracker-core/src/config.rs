//! Drawing surface configuration.

use crate::style::{LineColor, SerializableColor};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default stroke width in surface units.
pub const DEFAULT_LINE_THICKNESS: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Line thickness must be a positive finite number, got {0}")]
    InvalidThickness(f64),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Colors for the four angle bands of finished lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnglePalette {
    pub orange: SerializableColor,
    pub green: SerializableColor,
    pub blue: SerializableColor,
    pub cyan: SerializableColor,
}

impl Default for AnglePalette {
    fn default() -> Self {
        Self {
            orange: SerializableColor::rgb(255, 128, 0),
            green: SerializableColor::rgb(0, 255, 0),
            blue: SerializableColor::rgb(0, 0, 255),
            cyan: SerializableColor::rgb(0, 255, 255),
        }
    }
}

/// Stroke configuration of a drawing surface.
///
/// Every field is optional when deserializing; missing fields take their
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Stroke width for every line.
    pub line_thickness: f64,
    /// Finished lines whose angle matches no band.
    pub finished_line_color: SerializableColor,
    /// Lines still being drawn.
    pub current_line_color: SerializableColor,
    /// The selected line.
    pub selected_line_color: SerializableColor,
    /// Angle band colors.
    pub palette: AnglePalette,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_LINE_THICKNESS,
            finished_line_color: SerializableColor::black(),
            current_line_color: SerializableColor::rgb(255, 0, 0),
            selected_line_color: SerializableColor::rgb(255, 255, 0),
            palette: AnglePalette::default(),
        }
    }
}

impl SurfaceConfig {
    /// Resolve a color role to the configured color.
    pub fn color(&self, role: LineColor) -> Color {
        let color = match role {
            LineColor::Finished => self.finished_line_color,
            LineColor::Current => self.current_line_color,
            LineColor::Selected => self.selected_line_color,
            LineColor::Orange => self.palette.orange,
            LineColor::Green => self.palette.green,
            LineColor::Blue => self.palette.blue,
            LineColor::Cyan => self.palette.cyan,
        };
        color.into()
    }

    /// Check that the configuration can be used for stroking.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(ConfigError::InvalidThickness(self.line_thickness));
        }
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SurfaceConfig::default();
        assert!((config.line_thickness - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.finished_line_color, SerializableColor::black());
        assert_eq!(config.current_line_color, SerializableColor::rgb(255, 0, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SurfaceConfig::from_json(r#"{ "line_thickness": 4.0 }"#).unwrap();
        assert!((config.line_thickness - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.selected_line_color, SerializableColor::rgb(255, 255, 0));
        assert_eq!(config.palette, AnglePalette::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = SurfaceConfig::default();
        config.palette.cyan = SerializableColor::rgb(1, 2, 3);
        let json = config.to_json().unwrap();
        assert_eq!(SurfaceConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_thickness() {
        let err = SurfaceConfig::from_json(r#"{ "line_thickness": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThickness(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SurfaceConfig::from_json("{ line_thickness: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_color_lookup() {
        let config = SurfaceConfig::default();
        let blue = SerializableColor::from(config.color(LineColor::Blue));
        assert_eq!(blue, SerializableColor::rgb(0, 0, 255));
    }
}
