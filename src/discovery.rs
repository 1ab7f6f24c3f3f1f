// src/discovery.rs
//! Finds modules and the source files under them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{LayerGuardError, Result};

/// Modules and candidate files of one scan.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub modules: Vec<String>,
    /// Absolute (root-joined) file paths, sorted.
    pub files: Vec<PathBuf>,
    /// Directories or entries that could not be walked.
    pub skipped: usize,
}

/// Runs the discovery pipeline.
///
/// # Errors
/// Returns `ModuleRoot` if the module directory cannot be read and
/// `NoModules` if it holds no module directory. Unreadable entries below it
/// are logged and skipped.
pub fn discover(config: &Config) -> Result<Discovery> {
    let module_root = config.module_root();
    let modules = find_modules(&module_root)?;
    if modules.is_empty() {
        return Err(LayerGuardError::NoModules(module_root));
    }
    info!(count = modules.len(), ?modules, "modules found");

    let mut discovery = Discovery {
        modules,
        ..Discovery::default()
    };

    for module in &discovery.modules {
        let (files, errors) = walk_module(&module_root.join(module), &config.project.extension);
        discovery.files.extend(files);
        discovery.skipped += errors;
    }

    discovery.files.sort();
    info!(files = discovery.files.len(), skipped = discovery.skipped, "source files found");
    Ok(discovery)
}

/// Immediate, non-hidden child directories of the module root, sorted.
///
/// # Errors
/// Returns `ModuleRoot` if `module_root` is not a readable directory.
pub fn find_modules(module_root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(module_root).map_err(|source| LayerGuardError::ModuleRoot {
        path: module_root.to_path_buf(),
        source,
    })?;

    let mut modules = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) if entry.path().is_dir() => {
                let name = entry.file_name().to_string_lossy().into_owned();
                if !name.starts_with('.') {
                    modules.push(name);
                }
            }
            Ok(_) => {}
            Err(e) => report_skip(&LayerGuardError::Scan {
                path: module_root.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
    modules.sort();
    Ok(modules)
}

fn walk_module(dir: &Path, extension: &str) -> (Vec<PathBuf>, usize) {
    let walker = WalkDir::new(dir).follow_links(false).into_iter();
    accumulate_walker(walker, extension)
}

fn accumulate_walker<I>(walker: I, extension: &str) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                    debug!(path = %entry.path().display(), "candidate");
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                report_skip(&LayerGuardError::from(e));
                errors += 1;
            }
        }
    }
    (paths, errors)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn report_skip(err: &LayerGuardError) {
    warn!("skipping: {err}");
}
