// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, LayerGuardToml, ParserConfig, ProjectConfig, ReportConfig};

use std::path::{Path, PathBuf};

use crate::error::Result;

impl Config {
    /// Default settings rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Loads `layerguard.toml` from the project root, falling back to defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let path = root.join(CONFIG_FILE);
        Ok(Self::from_toml(root, io::load_toml_or_default(&path)?))
    }

    /// Loads settings from an explicit config file, which must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing or malformed.
    pub fn load_from(root: impl Into<PathBuf>, path: &Path) -> Result<Self> {
        Ok(Self::from_toml(root, io::load_toml(path)?))
    }

    #[must_use]
    pub fn from_toml(root: impl Into<PathBuf>, toml: LayerGuardToml) -> Self {
        Self {
            root: root.into(),
            project: toml.project,
            parser: toml.parser,
            report: toml.report,
        }
    }

    /// Directory whose children are the modules.
    #[must_use]
    pub fn module_root(&self) -> PathBuf {
        self.project
            .module_package
            .split('.')
            .filter(|s| !s.is_empty())
            .fold(self.root.join(&self.project.source_root), |acc, seg| acc.join(seg))
    }

    /// Path segment directly above a module directory.
    #[must_use]
    pub fn module_anchor(&self) -> &str {
        self.project
            .module_package
            .rsplit('.')
            .next()
            .unwrap_or("module")
    }

    /// Imports starting with this prefix are internal to the project.
    #[must_use]
    pub fn namespace_prefix(&self) -> String {
        format!("{}.", self.project.module_package.trim_end_matches('.'))
    }

    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        let output = Path::new(&self.report.output);
        if output.is_absolute() {
            output.to_path_buf()
        } else {
            self.root.join(output)
        }
    }
}
