//! Loading recorded event scripts and surface configuration from disk.

use crate::app::{AppError, AppResult};
use std::fs;
use std::path::Path;
use touchtracker_core::{SurfaceConfig, SurfaceEvent};

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON array of surface events.
pub fn parse_script(json: &str) -> AppResult<Vec<SurfaceEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Load an event script from a JSON file.
pub fn load_script(path: &Path) -> AppResult<Vec<SurfaceEvent>> {
    let events = parse_script(&read(path)?)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load a surface configuration from a JSON file.
pub fn load_config(path: &Path) -> AppResult<SurfaceConfig> {
    let config = SurfaceConfig::from_json(&read(path)?)?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}
