//! Vello-based renderer implementation.

use crate::renderer::{stroke_commands, RenderContext, RenderResult, Renderer};
use kurbo::Affine;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Surface-to-screen transform (e.g. for HiDPI scaling).
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Set the device pixel ratio.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.transform = Affine::scale(scale_factor);
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        // Clear the scene
        self.scene.reset();

        for command in stroke_commands(ctx.data, ctx.config)? {
            self.scene.stroke(
                &command.stroke,
                self.transform,
                command.color,
                None,
                &command.to_path(),
            );
        }
        Ok(())
    }
}
