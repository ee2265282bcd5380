//! Stage-grouped ordering: dependency levels with no intra-stage ordering.
//!
//! Each stage holds nodes whose providers have all completed in earlier
//! stages, so a caller sequencing rollouts can treat one stage as a wave.
//! This module only reports the grouping; it performs no execution.

use crate::graph::DependencyGraph;
use opsgraph_core::{Edge, Error, Result};
use std::collections::VecDeque;

/// Compute dependency stages for the declared nodes and edges.
///
/// Validation and error semantics match [`crate::order::resolve`]; the
/// difference is the shape of the result. The queue is drained one level at
/// a time: every node that is currently at in-degree zero forms one stage,
/// in declaration order. Flattening the stages yields a valid topological
/// order.
pub fn resolve_stages<S: AsRef<str>>(nodes: &[S], edges: &[Edge]) -> Result<Vec<Vec<String>>> {
    let graph = DependencyGraph::build(nodes, edges)?;
    resolve_graph_stages(&graph)
}

/// Run the staged resolve pass over an already-built graph.
pub fn resolve_graph_stages(graph: &DependencyGraph) -> Result<Vec<Vec<String>>> {
    let mut in_degree = graph.in_degrees();

    let mut queue: VecDeque<String> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(node, _)| node.clone())
        .collect();

    let mut stages = Vec::new();
    let mut processed = 0;
    while !queue.is_empty() {
        let stage: Vec<String> = queue.drain(..).collect();

        for node in &stage {
            for dependant in graph.dependants_of(node) {
                if let Some(degree) = in_degree.get_mut(dependant) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependant.clone());
                    }
                }
            }
        }

        processed += stage.len();
        stages.push(stage);
    }

    if processed != graph.len() {
        let remaining = in_degree
            .iter()
            .filter(|(_, &degree)| degree > 0)
            .map(|(node, _)| node.clone())
            .collect();
        return Err(Error::cycle_detected(remaining));
    }

    Ok(stages)
}
