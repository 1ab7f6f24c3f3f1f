// src/cli/handlers.rs
//! Handler for the dependency check.

use anyhow::{Context, Result};

use super::args::Cli;
use crate::config::Config;
use crate::engine::Engine;
use crate::report::print_summary;

/// Loads config, runs the analysis, writes the report and prints the result.
/// Findings do not fail the run.
///
/// # Errors
/// Returns error if config loading, analysis setup or report writing fails.
pub fn handle_check(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let report_path = config.report_path();
    let engine = Engine::new(config);

    let analysis = engine
        .analyze()
        .with_context(|| format!("dependency check failed for {}", cli.root.display()))?;
    let report = &analysis.report;
    report.write_to(&report_path)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else if !cli.quiet {
        print_summary(report, &engine.config().report, Some(&report_path));
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(&cli.root, path)?,
        None => Config::load(&cli.root)?,
    };
    if let Some(output) = &cli.output {
        config.report.output = output.to_string_lossy().into_owned();
    }
    Ok(config)
}
