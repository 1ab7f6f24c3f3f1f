// src/engine.rs
//! Runs one analysis: scan, parse, build, detect, aggregate.
//!
//! All state lives in the values passed between the phases.

use std::path::{Path, PathBuf};

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discovery::{self, Discovery};
use crate::error::Result;
use crate::graph::{
    classify_path, detect_cycles, detect_violations, module_from_path, DependencyGraph,
    SourceParser, SourceUnit,
};
use crate::report::{aggregate, Report, ScanSummary};

/// Output of a run: the report and the graph it was computed from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: Report,
    pub graph: DependencyGraph,
    pub units: Vec<SourceUnit>,
}

pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes the configured tree.
    ///
    /// # Errors
    /// Returns error if the module root is missing or a configured pattern is
    /// invalid. Per-file failures are logged and skipped.
    pub fn analyze(&self) -> Result<Analysis> {
        let discovery = discovery::discover(&self.config)?;
        let parser = SourceParser::new(&self.config.parser, self.config.namespace_prefix())?;
        Ok(self.analyze_files(&parser, discovery))
    }

    fn analyze_files(&self, parser: &SourceParser, discovery: Discovery) -> Analysis {
        let units = self.parse_units(parser, &discovery.files);
        let graph: DependencyGraph = units.iter().collect();
        info!(
            units = units.len(),
            symbols = graph.symbol_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );

        let cycles = detect_cycles(&graph);
        info!(count = cycles.len(), "circular dependencies found");

        let violations = detect_violations(&graph);
        info!(count = violations.len(), "layer violations found");

        let scan = ScanSummary {
            modules: discovery.modules,
            files_analyzed: discovery.files.len(),
            total_dependencies: units.iter().map(|u| u.dependencies.len()).sum(),
        };
        let report = aggregate(scan, &graph, &cycles, violations);

        Analysis {
            report,
            graph,
            units,
        }
    }

    /// Parses files in parallel. Output keeps the (sorted) input order.
    fn parse_units(&self, parser: &SourceParser, files: &[PathBuf]) -> Vec<SourceUnit> {
        let results: Vec<Result<SourceUnit>> = files
            .par_iter()
            .map(|path| self.load_unit(parser, path))
            .collect();

        results
            .into_iter()
            .filter_map(|result| match result {
                Ok(unit) => Some(unit),
                Err(e) => {
                    warn!("skipping: {e}");
                    None
                }
            })
            .collect()
    }

    fn load_unit(&self, parser: &SourceParser, path: &Path) -> Result<SourceUnit> {
        let parsed = parser.parse_file(path)?;
        let relative = path.strip_prefix(&self.config.root).unwrap_or(path);
        let unit = SourceUnit {
            symbol: parsed.symbol,
            path: relative.to_path_buf(),
            layer: classify_path(relative),
            module: module_from_path(relative, self.config.module_anchor()),
            dependencies: parsed.imports,
        };
        debug!(
            symbol = %unit.symbol,
            layer = %unit.layer,
            module = %unit.module,
            deps = unit.dependencies.len(),
            "parsed"
        );
        Ok(unit)
    }
}
