// src/graph/mod.rs
//! Symbol dependency graph and the architectural checks run over it.

pub mod builder;
pub mod cycles;
pub mod layers;
pub mod parser;
pub mod types;
pub mod violations;

pub use builder::{DependencyGraph, GraphBuilder};
pub use cycles::{dedup_cycles, detect_cycles};
pub use layers::{classify_path, module_from_path};
pub use parser::{ParsedUnit, SourceParser};
pub use types::{Cycle, Layer, SourceUnit, Violation, ViolationKind, UNKNOWN_MODULE};
pub use violations::{check_edge, detect_violations};

#[cfg(test)]
mod tests;
