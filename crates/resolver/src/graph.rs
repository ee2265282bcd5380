//! Dependency graph construction and validation.
//!
//! A [`DependencyGraph`] is built once per resolution from a declared node
//! set and a list of directed edges, and is immutable afterwards. Node
//! declaration order is preserved throughout; it is what makes resolution
//! output reproducible across runs with identical input.

use indexmap::{IndexMap, IndexSet};
use opsgraph_core::{Edge, Error, Result};
use std::collections::HashSet;

/// An immutable adjacency view of a declared dependency set.
///
/// Adjacency is keyed by provider: for each node, the list of nodes that
/// depend on it. The in-degree table counts distinct providers per node.
/// Both are derived from the same deduplicated edge set.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: IndexSet<String>,
    dependants: IndexMap<String, Vec<String>>,
    in_degree: IndexMap<String, usize>,
}

impl DependencyGraph {
    /// Build a graph from declared nodes and directed edges.
    ///
    /// Fails with a configuration error if a node is declared twice, or
    /// with [`Error::UndeclaredNode`] if an edge references a node outside
    /// the declared set. Parallel duplicate edges are idempotent: only the
    /// first occurrence contributes to adjacency and in-degree.
    pub fn build<S: AsRef<str>>(nodes: &[S], edges: &[Edge]) -> Result<Self> {
        let mut declared = IndexSet::with_capacity(nodes.len());
        for node in nodes {
            let node = node.as_ref();
            if !declared.insert(node.to_string()) {
                return Err(Error::configuration(format!(
                    "node '{node}' declared more than once"
                )));
            }
        }

        let mut dependants: IndexMap<String, Vec<String>> =
            IndexMap::with_capacity(declared.len());
        let mut in_degree: IndexMap<String, usize> = IndexMap::with_capacity(declared.len());
        for node in &declared {
            dependants.insert(node.clone(), Vec::new());
            in_degree.insert(node.clone(), 0);
        }

        let mut seen = HashSet::with_capacity(edges.len());
        for edge in edges {
            for endpoint in [&edge.provider, &edge.dependant] {
                if !declared.contains(endpoint.as_str()) {
                    return Err(Error::undeclared_node(
                        endpoint,
                        &edge.provider,
                        &edge.dependant,
                    ));
                }
            }
            if !seen.insert((edge.provider.as_str(), edge.dependant.as_str())) {
                continue;
            }
            if let Some(list) = dependants.get_mut(&edge.provider) {
                list.push(edge.dependant.clone());
            }
            if let Some(degree) = in_degree.get_mut(&edge.dependant) {
                *degree += 1;
            }
        }

        Ok(Self {
            nodes: declared,
            dependants,
            in_degree,
        })
    }

    /// Number of declared nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a node was declared
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Declared nodes, in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Nodes that directly depend on `node`
    #[must_use]
    pub fn dependants_of(&self, node: &str) -> &[String] {
        self.dependants.get(node).map_or(&[], Vec::as_slice)
    }

    /// Count of distinct providers `node` waits on
    #[must_use]
    pub fn in_degree_of(&self, node: &str) -> Option<usize> {
        self.in_degree.get(node).copied()
    }

    /// A fresh, mutable copy of the in-degree table for one resolve pass.
    /// Keys iterate in declaration order.
    pub(crate) fn in_degrees(&self) -> IndexMap<String, usize> {
        self.in_degree.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_adjacency_keyed_by_provider() {
        let graph = DependencyGraph::build(
            &["api", "db", "cache"],
            &[Edge::new("db", "api"), Edge::new("cache", "api")],
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.dependants_of("db"), ["api"]);
        assert_eq!(graph.dependants_of("cache"), ["api"]);
        assert!(graph.dependants_of("api").is_empty());
        assert_eq!(graph.in_degree_of("api"), Some(2));
        assert_eq!(graph.in_degree_of("db"), Some(0));
    }

    #[test]
    fn duplicate_edges_do_not_double_count() {
        let graph = DependencyGraph::build(
            &["a", "b"],
            &[Edge::new("a", "b"), Edge::new("a", "b"), Edge::new("a", "b")],
        )
        .unwrap();

        assert_eq!(graph.in_degree_of("b"), Some(1));
        assert_eq!(graph.dependants_of("a"), ["b"]);
    }

    #[test]
    fn rejects_edge_with_undeclared_endpoint() {
        let err = DependencyGraph::build(&["a"], &[Edge::new("a", "b")]).unwrap_err();
        match err {
            Error::UndeclaredNode {
                node,
                provider,
                dependant,
            } => {
                assert_eq!(node, "b");
                assert_eq!(provider, "a");
                assert_eq!(dependant, "b");
            }
            other => panic!("expected UndeclaredNode, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_node_declaration() {
        let err = DependencyGraph::build(&["a", "b", "a"], &[]).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn preserves_declaration_order() {
        let graph = DependencyGraph::build(&["z", "m", "a"], &[]).unwrap();
        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, ["z", "m", "a"]);
    }
}
