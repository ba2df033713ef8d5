//! TouchTracker Application
//!
//! A headless host for a TouchTracker surface: it replays recorded touch and
//! gesture events and renders the result as a stroke list.

mod app;
mod script;

pub use app::{describe_stroke, App, AppConfig, AppError, AppResult};
pub use script::{load_config, load_script, parse_script};
