//! Circular dependency and layer-ordering checks for layered source trees.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod report;

pub use engine::{Analysis, Engine};
pub use error::{LayerGuardError, Result};
