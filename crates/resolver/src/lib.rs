//! Dependency resolution for infrastructure start ordering.
//!
//! Given a declared set of nodes (services, build units, migration steps)
//! and directed (provider, dependant) edges, this crate computes a
//! reproducible processing order via Kahn's algorithm, or reports the
//! nodes stuck in a dependency cycle when no valid order exists.
//!
//! Resolution is pure, single-threaded computation: no I/O, no shared
//! state across calls, O(V+E) per pass. Identical inputs always produce
//! identical output, anchored on the declaration order of the node set.

pub mod graph;
pub mod order;
pub mod stages;

mod tests_proptest;

pub use graph::DependencyGraph;
pub use order::{resolve, resolve_graph, StartOrder};
pub use stages::{resolve_graph_stages, resolve_stages};
