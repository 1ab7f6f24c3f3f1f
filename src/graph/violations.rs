// src/graph/violations.rs
//! Layering rules evaluated per dependency edge.

use super::builder::DependencyGraph;
use super::types::{Layer, Violation, ViolationKind};

/// Classifies one edge. Rules are checked in order and the first match wins.
#[must_use]
pub fn check_edge(
    source: Layer,
    target: Layer,
    source_module: &str,
    target_module: &str,
) -> Option<ViolationKind> {
    let (Some(from), Some(to)) = (source.ordinal(), target.ordinal()) else {
        return None;
    };

    if from > to {
        return Some(ViolationKind::LayerInversion);
    }
    match (source, target) {
        (Layer::Domain, Layer::Infrastructure) => Some(ViolationKind::DomainDependsOnInfra),
        (Layer::Domain, Layer::Interface) => Some(ViolationKind::DomainDependsOnIntf),
        (Layer::Domain, Layer::Domain) if source_module != target_module => {
            Some(ViolationKind::CrossModuleDomainDependency)
        }
        _ => None,
    }
}

/// Evaluates every edge of the graph in sorted order.
#[must_use]
pub fn detect_violations(graph: &DependencyGraph) -> Vec<Violation> {
    graph
        .edges()
        .filter_map(|(from, to)| evaluate(graph, from, to))
        .collect()
}

fn evaluate(graph: &DependencyGraph, from: &str, to: &str) -> Option<Violation> {
    let source_layer = graph.layer_of(from);
    let target_layer = graph.layer_of(to);
    let source_module = graph.module_of(from);
    let target_module = graph.module_of(to);

    let kind = check_edge(source_layer, target_layer, source_module, target_module)?;
    Some(Violation {
        kind,
        source_class: from.to_string(),
        target_class: to.to_string(),
        source_layer,
        target_layer,
        source_module: source_module.to_string(),
        target_module: target_module.to_string(),
        description: kind.description(source_layer, target_layer),
    })
}
