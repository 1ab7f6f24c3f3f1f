use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the layered tree lives and which files belong to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Package that holds one sub-package per module. Its last segment is the
    /// anchor used to read a module name out of a path.
    #[serde(default = "default_module_package")]
    pub module_package: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            module_package: default_module_package(),
            extension: default_extension(),
        }
    }
}

fn default_source_root() -> String { "src/main/java".to_string() }
fn default_module_package() -> String { "com.jiuxi.module".to_string() }
fn default_extension() -> String { "java".to_string() }

/// Line-anchored patterns for the lexical pre-pass. Capture group 1 is the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_package_pattern")]
    pub package_pattern: String,
    #[serde(default = "default_import_pattern")]
    pub import_pattern: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            package_pattern: default_package_pattern(),
            import_pattern: default_import_pattern(),
        }
    }
}

fn default_package_pattern() -> String { r"^package\s+([\w.]+)\s*;".to_string() }
fn default_import_pattern() -> String { r"^import\s+(?:static\s+)?([\w.*]+)\s*;".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report destination, relative to the project root unless absolute.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_summary_cycles")]
    pub summary_cycles: usize,
    #[serde(default = "default_summary_cycle_symbols")]
    pub summary_cycle_symbols: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            summary_cycles: default_summary_cycles(),
            summary_cycle_symbols: default_summary_cycle_symbols(),
        }
    }
}

fn default_output() -> String { "dependency-check-report.json".to_string() }
const fn default_summary_cycles() -> usize { 3 }
const fn default_summary_cycle_symbols() -> usize { 3 }

/// On-disk shape of `layerguard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayerGuardToml {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub root: PathBuf,
    pub project: ProjectConfig,
    pub parser: ParserConfig,
    pub report: ReportConfig,
}
