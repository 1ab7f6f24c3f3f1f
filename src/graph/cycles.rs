// src/graph/cycles.rs
//! Cycle detection over the symbol graph.
//!
//! Depth-first search with an explicit frame stack, so deep graphs cannot
//! overflow the call stack. A back edge to a node on the current path closes a
//! cycle. The search from a root stops at its first cycle; nodes it already
//! visited are not explored again from later roots.

use std::collections::btree_set;
use std::collections::HashSet;

use super::builder::DependencyGraph;
use super::types::Cycle;

/// Finds cycles and removes duplicates that are rotations of each other.
#[must_use]
pub fn detect_cycles(graph: &DependencyGraph) -> Vec<Cycle> {
    dedup_cycles(find_raw_cycles(graph))
}

/// Runs the traversal without deduplication.
#[must_use]
pub fn find_raw_cycles(graph: &DependencyGraph) -> Vec<Cycle> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut cycles = Vec::new();

    for root in graph.sources() {
        if visited.contains(root) {
            continue;
        }
        if let Some(cycle) = search_from(root, graph, &mut visited) {
            cycles.push(cycle);
        }
    }

    cycles
}

/// Keeps the first cycle of every group sharing a symbol set and length.
#[must_use]
pub fn dedup_cycles(cycles: Vec<Cycle>) -> Vec<Cycle> {
    let mut unique: Vec<Cycle> = Vec::new();
    for cycle in cycles {
        if !unique.iter().any(|seen| seen.same_loop(&cycle)) {
            unique.push(cycle);
        }
    }
    unique
}

struct Frame<'g> {
    node: &'g str,
    neighbors: btree_set::Iter<'g, String>,
}

struct DfsState<'g> {
    frames: Vec<Frame<'g>>,
    on_stack: HashSet<&'g str>,
    path: Vec<&'g str>,
}

impl<'g> DfsState<'g> {
    fn push(&mut self, node: &'g str, graph: &'g DependencyGraph) {
        self.on_stack.insert(node);
        self.path.push(node);
        self.frames.push(Frame {
            node,
            neighbors: graph.dependencies_of(node).iter(),
        });
    }

    fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.on_stack.remove(frame.node);
            self.path.pop();
        }
    }

    #[allow(clippy::indexing_slicing)] // Guarded: pos is from position() returning Some
    fn close_loop(&self, back_to: &str) -> Option<Cycle> {
        let pos = self.path.iter().position(|n| *n == back_to)?;
        let mut cycle: Vec<String> = self.path[pos..].iter().map(|s| (*s).to_string()).collect();
        cycle.push(back_to.to_string());
        Some(Cycle::new(cycle))
    }
}

fn search_from<'g>(
    root: &'g str,
    graph: &'g DependencyGraph,
    visited: &mut HashSet<&'g str>,
) -> Option<Cycle> {
    let mut state = DfsState {
        frames: Vec::new(),
        on_stack: HashSet::new(),
        path: Vec::new(),
    };
    visited.insert(root);
    state.push(root, graph);

    while let Some(frame) = state.frames.last_mut() {
        let Some(next) = frame.neighbors.next() else {
            state.pop();
            continue;
        };
        let next = next.as_str();
        if state.on_stack.contains(next) {
            return state.close_loop(next);
        }
        if visited.insert(next) {
            state.push(next, graph);
        }
    }

    None
}
