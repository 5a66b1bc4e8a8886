//! Trait definitions for graph abstractions.
//!
//! The reachability helper in [`traversal`](crate::graph::traversal) is written against these
//! traits rather than against [`AnnotatedGraph`](crate::graph::AnnotatedGraph) directly, so it
//! also works on views such as [`Transposed`]. Kosaraju's second pass walks the transposed view.
//!
//! - [`GraphBase`] - Core properties: node count and node iteration
//! - [`Successors`] - Forward adjacency
//! - [`Predecessors`] - Backward adjacency

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph, in insertion order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// For the annotated graph a bidirectional edge makes each endpoint a successor of the other.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose successors to iterate
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose predecessors to iterate
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// A read-only view of a graph with every edge reversed.
///
/// # Examples
///
/// ```rust
/// use graphstep::graph::{traversal::bfs, AnnotatedGraph, Transposed};
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node("A")?;
/// let b = graph.add_node("B")?;
/// graph.add_edge(a, b, None, false)?;
///
/// let backwards: Vec<_> = bfs(&Transposed(&graph), b).collect();
/// assert_eq!(backwards, vec![b, a]);
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transposed<'g, G>(pub &'g G);

impl<G: GraphBase> GraphBase for Transposed<'_, G> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.0.node_ids()
    }
}

impl<G: Predecessors> Successors for Transposed<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.0.predecessors(node)
    }
}

impl<G: Successors> Predecessors for Transposed<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.0.successors(node)
    }
}
