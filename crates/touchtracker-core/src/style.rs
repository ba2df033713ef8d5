//! Stroke colors and the angle-based color classification.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The color role a line is stroked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineColor {
    /// Configured color for finished lines at exactly -180° or outside every band.
    Finished,
    /// Lines still being drawn by a contact.
    Current,
    /// The selected line.
    Selected,
    /// Angle in (-180, -90).
    Orange,
    /// Angle in [-90, 0).
    Green,
    /// Angle in [0, 90).
    Blue,
    /// Angle in [90, 180).
    Cyan,
}

impl LineColor {
    /// Classify a finished line by its angle in degrees.
    ///
    /// Exactly -180 (a line drawn straight up) takes the finished color.
    pub fn for_angle(degrees: f64) -> Self {
        if degrees == -180.0 {
            LineColor::Finished
        } else if (-180.0..-90.0).contains(&degrees) {
            LineColor::Orange
        } else if (-90.0..0.0).contains(&degrees) {
            LineColor::Green
        } else if (0.0..90.0).contains(&degrees) {
            LineColor::Blue
        } else if (90.0..180.0).contains(&degrees) {
            LineColor::Cyan
        } else {
            LineColor::Finished
        }
    }

    /// Get display name for this color role.
    pub fn name(self) -> &'static str {
        match self {
            LineColor::Finished => "finished",
            LineColor::Current => "current",
            LineColor::Selected => "selected",
            LineColor::Orange => "orange",
            LineColor::Green => "green",
            LineColor::Blue => "blue",
            LineColor::Cyan => "cyan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_lower_edges_are_inclusive() {
        assert_eq!(LineColor::for_angle(-90.0), LineColor::Green);
        assert_eq!(LineColor::for_angle(0.0), LineColor::Blue);
        assert_eq!(LineColor::for_angle(90.0), LineColor::Cyan);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(LineColor::for_angle(-135.0), LineColor::Orange);
        assert_eq!(LineColor::for_angle(-45.0), LineColor::Green);
        assert_eq!(LineColor::for_angle(45.0), LineColor::Blue);
        assert_eq!(LineColor::for_angle(179.9), LineColor::Cyan);
    }

    #[test]
    fn test_negative_zero_is_blue() {
        assert_eq!(LineColor::for_angle(-0.0), LineColor::Blue);
    }

    #[test]
    fn test_out_of_band_falls_back_to_finished() {
        assert_eq!(LineColor::for_angle(-180.0), LineColor::Finished);
        assert_eq!(LineColor::for_angle(-179.9), LineColor::Orange);
        assert_eq!(LineColor::for_angle(180.0), LineColor::Finished);
        assert_eq!(LineColor::for_angle(-180.5), LineColor::Finished);
        assert_eq!(LineColor::for_angle(f64::NAN), LineColor::Finished);
    }

    #[test]
    fn test_color_roundtrip_through_peniko() {
        let color = SerializableColor::new(12, 34, 56, 78);
        let back = SerializableColor::from(Color::from(color));
        assert_eq!(back, color);
        assert_eq!(color.to_hex(), "#0c22384e");
    }
}
