// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::LayerGuardToml;
use crate::error::{LayerGuardError, Result};

pub const CONFIG_FILE: &str = "layerguard.toml";

/// Reads `path` if it exists. A missing file yields the defaults.
///
/// # Errors
/// Returns `Config` if the file exists but cannot be read or parsed.
pub fn load_toml_or_default(path: &Path) -> Result<LayerGuardToml> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LayerGuardToml::default());
    }
    load_toml(path)
}

/// Reads and parses `path`.
///
/// # Errors
/// Returns `Config` if the file is missing, unreadable or malformed.
pub fn load_toml(path: &Path) -> Result<LayerGuardToml> {
    let content = fs::read_to_string(path).map_err(|e| LayerGuardError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_toml(path, &content)
}

/// # Errors
/// Returns `Config` on malformed TOML.
pub fn parse_toml(path: &Path, content: &str) -> Result<LayerGuardToml> {
    toml::from_str(content).map_err(|e| LayerGuardError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
