// src/graph/types.rs
//! Core types shared by the graph components.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Module name used when a path has no module segment.
pub const UNKNOWN_MODULE: &str = "unknown";

/// Architectural tier. Declaration order is the dependency order:
/// interface adapters on the outside, infrastructure at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    #[serde(rename = "intf")]
    Interface,
    #[serde(rename = "app")]
    Application,
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "infra")]
    Infrastructure,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Layer {
    /// The four classified layers, outermost first.
    pub const DECLARED: [Layer; 4] = [
        Layer::Interface,
        Layer::Application,
        Layer::Domain,
        Layer::Infrastructure,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interface => "intf",
            Self::Application => "app",
            Self::Domain => "domain",
            Self::Infrastructure => "infra",
            Self::Unknown => "unknown",
        }
    }

    /// Position in the layer ordering; `None` for `Unknown`.
    #[must_use]
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Self::Interface => Some(1),
            Self::Application => Some(2),
            Self::Domain => Some(3),
            Self::Infrastructure => Some(4),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::DECLARED.into_iter().find(|l| l.label() == label)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scanned file, reduced to its symbol and internal imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub symbol: String,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub layer: Layer,
    pub module: String,
    pub dependencies: Vec<String>,
}

/// A closed dependency loop: `[s0, s1, .., sk-1, s0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    path: Vec<String>,
}

impl Cycle {
    /// `path` must repeat its first symbol at the end.
    #[must_use]
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Number of edges (distinct hops) in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.path.iter().map(String::as_str).collect()
    }

    /// Same loop regardless of starting point.
    #[must_use]
    pub fn same_loop(&self, other: &Cycle) -> bool {
        self.len() == other.len() && self.symbols() == other.symbols()
    }
}

/// Categories of layering violations, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// A lower layer depends on a higher one.
    LayerInversion,
    DomainDependsOnInfra,
    DomainDependsOnIntf,
    /// Domain code reaching into another module's domain.
    CrossModuleDomainDependency,
}

impl ViolationKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LayerInversion => "LAYER_INVERSION",
            Self::DomainDependsOnInfra => "DOMAIN_DEPENDS_ON_INFRA",
            Self::DomainDependsOnIntf => "DOMAIN_DEPENDS_ON_INTF",
            Self::CrossModuleDomainDependency => "CROSS_MODULE_DOMAIN_DEPENDENCY",
        }
    }

    #[must_use]
    pub fn description(&self, source: Layer, target: Layer) -> String {
        match self {
            Self::LayerInversion => format!(
                "{source} layer must not depend on {target} layer (dependency direction inverted)"
            ),
            Self::DomainDependsOnInfra => {
                "Domain layer must not depend on the infrastructure layer".to_string()
            }
            Self::DomainDependsOnIntf => {
                "Domain layer must not depend on the interface adapter layer".to_string()
            }
            Self::CrossModuleDomainDependency => {
                "Cross-module domain dependency; review the module boundary".to_string()
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One offending edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub source_class: String,
    pub target_class: String,
    pub source_layer: Layer,
    pub target_layer: Layer,
    pub source_module: String,
    pub target_module: String,
    pub description: String,
}
