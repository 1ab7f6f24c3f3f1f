// src/report/console.rs
//! Terminal summary of an analysis run.

use std::path::Path;

use colored::Colorize;

use super::Report;
use crate::config::ReportConfig;

/// Prints counts, the first few cycles and violations per kind.
pub fn print_summary(report: &Report, limits: &ReportConfig, written_to: Option<&Path>) {
    print_statistics(report);
    print_cycles(report, limits);
    print_violation_counts(report);
    print_verdict(report, written_to);
}

fn print_statistics(report: &Report) {
    let stats = &report.statistics;
    println!("\n{}", "DEPENDENCY CHECK".cyan().bold());
    println!("  files analyzed:        {}", stats.total_files_analyzed);
    println!("  modules analyzed:      {}", stats.modules_count);
    println!("  dependencies:          {}", stats.total_dependencies);
    println!("  circular dependencies: {}", format_count(stats.circular_dependency_count));
    println!("  layer violations:      {}", format_count(stats.layer_violation_count));
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}

fn print_cycles(report: &Report, limits: &ReportConfig) {
    if report.circular_dependencies.is_empty() {
        return;
    }

    println!("\n{}", "CIRCULAR DEPENDENCIES".red().bold());
    for (i, entry) in report
        .circular_dependencies
        .iter()
        .take(limits.summary_cycles)
        .enumerate()
    {
        println!("  {}. {}", i + 1, abbreviate(&entry.cycle, limits.summary_cycle_symbols));
    }
    let hidden = report
        .circular_dependencies
        .len()
        .saturating_sub(limits.summary_cycles);
    if hidden > 0 {
        println!("  {}", format!("... and {hidden} more").dimmed());
    }
}

/// Joins the first `max` symbols with arrows, marking truncation.
#[must_use]
pub fn abbreviate(cycle: &[String], max: usize) -> String {
    let shown: Vec<&str> = cycle.iter().take(max).map(String::as_str).collect();
    let mut line = shown.join(" -> ");
    if cycle.len() > max {
        line.push_str("...");
    }
    line
}

fn print_violation_counts(report: &Report) {
    let counts = report.violation_counts();
    if counts.is_empty() {
        return;
    }

    println!("\n{}", "LAYER VIOLATIONS".yellow().bold());
    for (kind, count) in counts {
        println!("  {} {}: {count}", "▸".yellow(), kind.label().yellow());
    }
}

fn print_verdict(report: &Report, written_to: Option<&Path>) {
    if report.is_clean() {
        println!("\n{}", "  ✓ No circular dependencies or layer violations.".green());
    } else {
        println!("\n{}", "  ✗ Dependency issues found; see the report for details.".yellow());
    }
    if let Some(path) = written_to {
        println!("  Report: {}", path.display().to_string().dimmed());
    }
}
