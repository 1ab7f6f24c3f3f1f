// src/graph/layers.rs
//! Path-based layer and module classification.
//!
//! An exact directory name wins; otherwise the lowercase path is searched for
//! layer-indicative keywords.

use std::path::{Component, Path};

use super::types::{Layer, UNKNOWN_MODULE};

/// Keyword fallback, evaluated top to bottom.
#[must_use]
pub fn classify_path(path: &Path) -> Layer {
    if let Some(layer) = segments(path).find_map(Layer::from_label) {
        return layer;
    }
    classify_keywords(&path.to_string_lossy().to_lowercase())
}

fn classify_keywords(path: &str) -> Layer {
    if path.contains("controller") || path.contains("web") {
        Layer::Interface
    } else if path.contains("service") && !path.contains("domain") {
        Layer::Application
    } else if path.contains("domain") || path.contains("entity") || path.contains("valueobject") {
        Layer::Domain
    } else if path.contains("mapper") || path.contains("persistence") || path.contains("repository") {
        Layer::Infrastructure
    } else {
        Layer::Unknown
    }
}

/// Returns the segment right after `anchor`, or `"unknown"`.
#[must_use]
pub fn module_from_path(path: &Path, anchor: &str) -> String {
    let mut parts = segments(path);
    parts
        .position(|s| s == anchor)
        .and_then(|_| parts.next())
        .map_or_else(|| UNKNOWN_MODULE.to_string(), str::to_string)
}

fn segments(path: &Path) -> impl Iterator<Item = &str> {
    path.components().filter_map(|c| match c {
        Component::Normal(s) => s.to_str(),
        _ => None,
    })
}
