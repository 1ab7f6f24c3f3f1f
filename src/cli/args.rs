use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "layerguard",
    version,
    about = "Circular dependency and DDD layering checks"
)]
pub struct Cli {
    /// Project root containing the source tree
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// Config file (defaults to <ROOT>/layerguard.toml)
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Report destination (overrides [report].output)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Print the JSON report to stdout instead of the summary
    #[arg(long)]
    pub json: bool,
    /// Suppress the terminal summary
    #[arg(long, short)]
    pub quiet: bool,
    /// Enable info-level logging
    #[arg(long, short)]
    pub verbose: bool,
    /// Also write log output to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
