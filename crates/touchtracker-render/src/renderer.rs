//! Renderer trait abstraction.

use kurbo::{BezPath, Cap, Join, Line as KurboLine, Stroke};
use peniko::Color;
use thiserror::Error;
use touchtracker_core::{ConfigError, LineColor, RenderData, SurfaceConfig};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid stroke configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// One line to stroke.
#[derive(Debug, Clone)]
pub struct StrokeCommand {
    /// The segment in surface coordinates.
    pub segment: KurboLine,
    /// Color role the segment was classified as.
    pub role: LineColor,
    /// Resolved stroke color.
    pub color: Color,
    /// Stroke style (width and round caps).
    pub stroke: Stroke,
}

impl StrokeCommand {
    /// Path for the segment.
    ///
    /// Zero-length segments still produce a path so that round caps
    /// draw a dot.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.segment.p0);
        path.line_to(self.segment.p1);
        path
    }
}

/// Stroke style shared by every line.
pub fn line_stroke(thickness: f64) -> Stroke {
    Stroke::new(thickness).with_caps(Cap::Round).with_join(Join::Round)
}

/// Turn render data into stroke commands, in paint order.
pub fn stroke_commands(data: &RenderData, config: &SurfaceConfig) -> RenderResult<Vec<StrokeCommand>> {
    config.validate()?;
    let stroke = line_stroke(config.line_thickness);
    Ok(data
        .strokes()
        .map(|(line, role)| StrokeCommand {
            segment: line.as_kurbo(),
            role,
            color: config.color(role),
            stroke: stroke.clone(),
        })
        .collect())
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// What the surface wants drawn.
    pub data: &'a RenderData,
    /// Stroke widths and colors.
    pub config: &'a SurfaceConfig,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(data: &'a RenderData, config: &'a SurfaceConfig) -> Self {
        Self { data, config }
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Renderer that keeps the stroke commands of the last frame.
///
/// Used by headless hosts and for testing.
#[derive(Debug, Default)]
pub struct StrokeListRenderer {
    commands: Vec<StrokeCommand>,
}

impl StrokeListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last built frame.
    pub fn commands(&self) -> &[StrokeCommand] {
        &self.commands
    }
}

impl Renderer for StrokeListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.commands = stroke_commands(ctx.data, ctx.config)?;
        log::debug!("Built frame with {} strokes", self.commands.len());
        Ok(())
    }
}
