//! TouchTracker Render Library
//!
//! Renderer abstraction for TouchTracker surfaces. The default build only
//! produces stroke commands; the `vello-renderer` feature adds a Vello scene
//! backend.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    line_stroke, stroke_commands, RenderContext, RenderResult, Renderer, RendererError,
    StrokeCommand, StrokeListRenderer,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
