// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerGuardError {
    /// A directory or entry under the module tree could not be walked.
    #[error("scan failed at {path}: {reason}")]
    Scan { path: PathBuf, reason: String },

    /// A source file could not be read or yielded no symbol.
    #[error("parse failed for {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("cannot read module root {path}: {source}")]
    ModuleRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no modules found under {0}")]
    NoModules(PathBuf),

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// The analysis finished but the report could not be persisted.
    #[error("failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayerGuardError>;

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for LayerGuardError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        LayerGuardError::Scan {
            path,
            reason: e.to_string(),
        }
    }
}
