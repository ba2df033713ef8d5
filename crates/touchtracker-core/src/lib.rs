//! TouchTracker Core Library
//!
//! Platform-agnostic line model and gesture handling for the TouchTracker
//! drawing surface.

pub mod config;
pub mod input;
pub mod line;
pub mod menu;
pub mod render_data;
pub mod style;
pub mod surface;

pub use config::{AnglePalette, ConfigError, ConfigResult, SurfaceConfig, DEFAULT_LINE_THICKNESS};
pub use input::{ContactId, GestureEvent, PanPhase, SurfaceEvent, TouchEvent};
pub use line::{Line, LineId, HIT_SAMPLES, HIT_TOLERANCE};
pub use menu::{MenuAction, MenuCommand, MenuController, RecordingMenu};
pub use render_data::RenderData;
pub use style::{LineColor, SerializableColor};
pub use surface::GestureSurface;
