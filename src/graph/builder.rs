// src/graph/builder.rs
//! Aggregates parsed units into a directed symbol graph.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Layer, SourceUnit, UNKNOWN_MODULE};

static NO_EDGES: BTreeSet<String> = BTreeSet::new();

/// Forward and reverse adjacency plus symbol indices.
///
/// Ordered containers keep every traversal deterministic. Targets that were
/// never parsed appear only as edge endpoints and classify as unknown.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    forward: BTreeMap<String, BTreeSet<String>>,
    reverse: BTreeMap<String, BTreeSet<String>>,
    layers: BTreeMap<String, Layer>,
    modules: BTreeMap<String, String>,
}

impl DependencyGraph {
    /// Symbols with at least one outgoing edge, sorted.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    #[must_use]
    pub fn dependencies_of(&self, symbol: &str) -> &BTreeSet<String> {
        self.forward.get(symbol).unwrap_or(&NO_EDGES)
    }

    #[must_use]
    pub fn dependents_of(&self, symbol: &str) -> &BTreeSet<String> {
        self.reverse.get(symbol).unwrap_or(&NO_EDGES)
    }

    #[must_use]
    pub fn layer_of(&self, symbol: &str) -> Layer {
        self.layers.get(symbol).copied().unwrap_or(Layer::Unknown)
    }

    #[must_use]
    pub fn module_of(&self, symbol: &str) -> &str {
        self.modules.get(symbol).map_or(UNKNOWN_MODULE, String::as_str)
    }

    /// Every `(source, target)` edge in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from.as_str(), to.as_str())))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }

    /// Number of symbols that were parsed from a file.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.dependencies_of(from).contains(to)
    }
}

/// Incremental builder; insertion is idempotent.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DependencyGraph,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a unit's classification and its edges. A symbol seen twice keeps
    /// the last classification and the union of both edge sets.
    pub fn add_unit(&mut self, unit: &SourceUnit) {
        self.graph.layers.insert(unit.symbol.clone(), unit.layer);
        self.graph.modules.insert(unit.symbol.clone(), unit.module.clone());
        for dep in &unit.dependencies {
            self.add_edge(&unit.symbol, dep);
        }
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.graph
            .forward
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        self.graph
            .reverse
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string());
    }

    #[must_use]
    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl<'a> FromIterator<&'a SourceUnit> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = &'a SourceUnit>>(iter: I) -> Self {
        let mut builder = GraphBuilder::new();
        for unit in iter {
            builder.add_unit(unit);
        }
        builder.build()
    }
}
