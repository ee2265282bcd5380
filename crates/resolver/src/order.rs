//! Flat start ordering via Kahn's algorithm.

use crate::graph::DependencyGraph;
use opsgraph_core::{Edge, Error, Result};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::ops::Index;

/// A valid linear processing order: every provider precedes all of its
/// direct and transitive dependants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartOrder {
    order: Vec<String>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl StartOrder {
    fn new(order: Vec<String>) -> Self {
        let positions = order
            .iter()
            .enumerate()
            .map(|(index, node)| (node.clone(), index))
            .collect();
        Self { order, positions }
    }

    /// Number of nodes in the order
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the order is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based start position of a node, if present
    #[must_use]
    pub fn position(&self, node: &str) -> Option<usize> {
        self.positions.get(node).copied()
    }

    /// Nodes in start order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The order as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Consume the order, yielding the underlying sequence
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl Index<usize> for StartOrder {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.order[index]
    }
}

impl<'a> IntoIterator for &'a StartOrder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Compute a start order for the declared nodes and edges.
///
/// Builds the [`DependencyGraph`] (validating every edge endpoint against
/// the declared set) and runs one FIFO pass of Kahn's algorithm. The output
/// is deterministic: zero-in-degree nodes are seeded in declaration order,
/// and first-discovered nodes are processed first.
///
/// Returns [`Error::CycleDetected`] naming every node whose in-degree never
/// reached zero when the graph is not a DAG, and [`Error::UndeclaredNode`]
/// when an edge references a node outside `nodes`. An empty node set
/// resolves to an empty order.
pub fn resolve<S: AsRef<str>>(nodes: &[S], edges: &[Edge]) -> Result<StartOrder> {
    let graph = DependencyGraph::build(nodes, edges)?;
    resolve_graph(&graph)
}

/// Run the resolve pass over an already-built graph.
pub fn resolve_graph(graph: &DependencyGraph) -> Result<StartOrder> {
    let mut in_degree = graph.in_degrees();

    let mut queue: VecDeque<String> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(node, _)| node.clone())
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    while let Some(node) = queue.pop_front() {
        for dependant in graph.dependants_of(&node) {
            if let Some(degree) = in_degree.get_mut(dependant) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependant.clone());
                }
            }
        }
        order.push(node);
    }

    if order.len() != graph.len() {
        let remaining = in_degree
            .iter()
            .filter(|(_, &degree)| degree > 0)
            .map(|(node, _)| node.clone())
            .collect();
        return Err(Error::cycle_detected(remaining));
    }

    Ok(StartOrder::new(order))
}
