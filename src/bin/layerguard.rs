// src/bin/layerguard.rs
use std::fs::File;
use std::path::Path;
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use layerguard_core::cli::{handle_check, Cli};
use layerguard_core::exit::LayerGuardExit;

fn main() {
    let cli = Cli::parse();
    let result = init_logging(cli.verbose, cli.log_file.as_deref()).and_then(|()| handle_check(&cli));

    match result {
        Ok(()) => LayerGuardExit::Success.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(LayerGuardExit::for_error(&e).code());
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .with(filter)
        .init();
    Ok(())
}
