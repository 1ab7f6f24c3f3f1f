// src/exit.rs
//! Standardized process exit codes for `layerguard`.
//!
//! Findings never change the exit code; only failures of the run itself do.

use crate::error::LayerGuardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LayerGuardExit {
    /// Analysis completed and the report was written (findings or not).
    Success = 0,
    /// Generic error (missing module root, bad config, bad pattern).
    Error = 1,
    /// Analysis finished but the report could not be persisted.
    ReportWriteFailed = 3,
}

impl LayerGuardExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LayerGuardError>() {
            Some(LayerGuardError::ReportWrite { .. }) => Self::ReportWriteFailed,
            _ => Self::Error,
        }
    }
}
