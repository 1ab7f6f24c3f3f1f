// src/report/mod.rs
//! Aggregation of graph, cycles and violations into the final report.

pub mod console;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LayerGuardError, Result};
use crate::graph::{Cycle, DependencyGraph, Layer, Violation, ViolationKind, UNKNOWN_MODULE};

pub use console::print_summary;

/// `source module -> target module -> edge count`.
pub type ModuleDependencies = BTreeMap<String, BTreeMap<String, usize>>;
/// `source layer -> target layer -> edge count`.
pub type LayerMatrix = BTreeMap<Layer, BTreeMap<Layer, usize>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_files_analyzed: usize,
    pub total_dependencies: usize,
    pub circular_dependency_count: usize,
    pub layer_violation_count: usize,
    pub modules_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEntry {
    pub cycle: Vec<String>,
    pub length: usize,
    /// Distinct modules touched by the cycle, sorted.
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub modules_analyzed: Vec<String>,
    pub statistics: Statistics,
    pub circular_dependencies: Vec<CycleEntry>,
    pub layer_violations: Vec<Violation>,
    pub module_dependencies: ModuleDependencies,
    pub dependency_matrix: LayerMatrix,
}

/// Scan-side facts the graph no longer carries.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub modules: Vec<String>,
    pub files_analyzed: usize,
    /// Sum of per-file internal import counts, before edge deduplication.
    pub total_dependencies: usize,
}

/// Builds the report. Pure apart from the timestamp.
#[must_use]
pub fn aggregate(
    scan: ScanSummary,
    graph: &DependencyGraph,
    cycles: &[Cycle],
    violations: Vec<Violation>,
) -> Report {
    let statistics = Statistics {
        total_files_analyzed: scan.files_analyzed,
        total_dependencies: scan.total_dependencies,
        circular_dependency_count: cycles.len(),
        layer_violation_count: violations.len(),
        modules_count: scan.modules.len(),
    };

    Report {
        timestamp: chrono::Local::now().to_rfc3339(),
        modules_analyzed: scan.modules,
        statistics,
        circular_dependencies: cycles.iter().map(|c| cycle_entry(c, graph)).collect(),
        layer_violations: violations,
        module_dependencies: module_dependencies(graph),
        dependency_matrix: dependency_matrix(graph),
    }
}

fn cycle_entry(cycle: &Cycle, graph: &DependencyGraph) -> CycleEntry {
    let modules: BTreeSet<&str> = cycle.path().iter().map(|s| graph.module_of(s)).collect();
    CycleEntry {
        cycle: cycle.path().to_vec(),
        length: cycle.len(),
        modules: modules.into_iter().map(str::to_string).collect(),
    }
}

/// Counts cross-module edges. Same-module edges and edges into an unknown
/// module are left out.
#[must_use]
pub fn module_dependencies(graph: &DependencyGraph) -> ModuleDependencies {
    let mut table = ModuleDependencies::new();
    for (from, to) in graph.edges() {
        let source = graph.module_of(from);
        let target = graph.module_of(to);
        if source == target || target == UNKNOWN_MODULE {
            continue;
        }
        *table
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_default() += 1;
    }
    table
}

/// Edge counts for every pair of declared layers, zeros included.
#[must_use]
pub fn dependency_matrix(graph: &DependencyGraph) -> LayerMatrix {
    let mut matrix: LayerMatrix = Layer::DECLARED
        .iter()
        .map(|&from| (from, Layer::DECLARED.iter().map(|&to| (to, 0)).collect()))
        .collect();

    for (from, to) in graph.edges() {
        let row = matrix.get_mut(&graph.layer_of(from));
        if let Some(cell) = row.and_then(|r| r.get_mut(&graph.layer_of(to))) {
            *cell += 1;
        }
    }
    matrix
}

impl Report {
    /// True when neither cycles nor violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.statistics.circular_dependency_count == 0
            && self.statistics.layer_violation_count == 0
    }

    #[must_use]
    pub fn violation_counts(&self) -> BTreeMap<ViolationKind, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.layer_violations {
            *counts.entry(v.kind).or_insert(0) += 1;
        }
        counts
    }

    /// # Errors
    /// Returns `Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Persists the report as pretty JSON.
    ///
    /// # Errors
    /// Returns `ReportWrite` if the destination cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| LayerGuardError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "report written");
        Ok(())
    }
}
