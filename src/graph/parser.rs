// src/graph/parser.rs
//! Lexical extraction of a file's symbol and internal imports.
//!
//! This is a line-oriented regex pre-pass, not a grammar. Declarations split
//! across lines are missed, declaration-like lines inside block comments are
//! picked up, and nested or conditional declarations are invisible. One file
//! maps to one symbol named after the file stem.

use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::config::ParserConfig;
use crate::error::{LayerGuardError, Result};

/// What one file declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUnit {
    pub symbol: String,
    pub package: String,
    /// Internal imports in declaration order.
    pub imports: Vec<String>,
}

/// Compiled extraction patterns plus the project namespace.
#[derive(Debug, Clone)]
pub struct SourceParser {
    package_re: Regex,
    import_re: Regex,
    namespace_prefix: String,
}

impl SourceParser {
    /// # Errors
    /// Returns `Regex` if a configured pattern does not compile.
    pub fn new(config: &ParserConfig, namespace_prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            package_re: multi_line(&config.package_pattern)?,
            import_re: multi_line(&config.import_pattern)?,
            namespace_prefix: namespace_prefix.into(),
        })
    }

    /// Reads and parses one file.
    ///
    /// # Errors
    /// Returns `Parse` if the file cannot be read as UTF-8 or has no usable name.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedUnit> {
        let content = fs::read_to_string(path).map_err(|e| LayerGuardError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.parse_content(path, &content)
    }

    /// # Errors
    /// Returns `Parse` if `path` has no file stem.
    pub fn parse_content(&self, path: &Path, content: &str) -> Result<ParsedUnit> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LayerGuardError::Parse {
                path: path.to_path_buf(),
                reason: "no file stem to name the symbol".to_string(),
            })?;

        let package = self
            .package_re
            .captures(content)
            .and_then(|c| c.get(1))
            .map_or_else(String::new, |m| m.as_str().to_string());

        let symbol = if package.is_empty() {
            stem.to_string()
        } else {
            format!("{package}.{stem}")
        };

        let imports = self
            .import_re
            .captures_iter(content)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .filter(|target| self.is_internal(target, &symbol))
            .map(str::to_string)
            .collect();

        Ok(ParsedUnit {
            symbol,
            package,
            imports,
        })
    }

    fn is_internal(&self, target: &str, symbol: &str) -> bool {
        target.starts_with(&self.namespace_prefix) && !target.ends_with(".*") && target != symbol
    }
}

fn multi_line(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).multi_line(true).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> SourceParser {
        SourceParser::new(&ParserConfig::default(), "com.acme.module.")
            .unwrap_or_else(|e| panic!("default patterns must compile: {e}"))
    }

    #[test]
    fn test_extracts_package_and_internal_imports() {
        let code = "\
package com.acme.module.order.domain;

import java.util.List;
import com.acme.module.order.infra.OrderMapper;
import static com.acme.module.common.Checks.notNull;
import com.acme.module.order.domain.*;
import com.acme.module.order.domain.Order;

public class Order {}
";
        let unit = parser()
            .parse_content(Path::new("order/domain/Order.java"), code)
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(unit.package, "com.acme.module.order.domain");
        assert_eq!(unit.symbol, "com.acme.module.order.domain.Order");
        assert_eq!(
            unit.imports,
            vec![
                "com.acme.module.order.infra.OrderMapper".to_string(),
                "com.acme.module.common.Checks.notNull".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_package_uses_stem() {
        let unit = parser()
            .parse_content(Path::new("Loose.java"), "import com.acme.module.a.B;\n")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(unit.symbol, "Loose");
        assert_eq!(unit.imports.len(), 1);
    }

    #[test]
    fn test_indented_declarations_are_ignored() {
        let code = "package com.acme.module.a;\n  import com.acme.module.b.C;\n";
        let unit = parser()
            .parse_content(Path::new("A.java"), code)
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(unit.imports.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_parse_error() {
        let result = parser().parse_file(Path::new("/definitely/not/here/A.java"));
        assert!(matches!(result, Err(LayerGuardError::Parse { .. })));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let config = ParserConfig {
            package_pattern: "(".to_string(),
            ..ParserConfig::default()
        };
        assert!(matches!(
            SourceParser::new(&config, "x."),
            Err(LayerGuardError::Regex(_))
        ));
    }
}
