//! Node identifiers and node storage for the annotated graph.
//!
//! This module provides the [`NodeId`] type, a strongly-typed index into the node table of an
//! [`AnnotatedGraph`](crate::graph::AnnotatedGraph), and [`Node`], the record holding a node's
//! label, position, outgoing adjacency and per-run decoration.
//!
//! Predecessor links stored in decorations are plain `NodeId`s, never references, so a
//! rewritten or cyclic predecessor chain can never keep anything alive.

use std::fmt;

use crate::graph::{EdgeId, NodeDecoration};

/// A strongly-typed identifier for nodes within an annotated graph.
///
/// `NodeId` wraps a `usize` index. Identifiers are assigned sequentially starting from 0 in
/// the order nodes are added, which is also the order every "for each node" loop of the
/// algorithms follows.
///
/// # Examples
///
/// ```rust
/// use graphstep::{AnnotatedGraph, NodeId};
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node("A")?;
/// let b = graph.add_node("B")?;
///
/// assert_eq!(a, NodeId::new(0));
/// assert_ne!(a, b);
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage should obtain `NodeId` values from
    /// [`AnnotatedGraph::add_node`](crate::graph::AnnotatedGraph::add_node).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Planar coordinates of a node.
///
/// Positions are owned by the graph-building collaborator (layout, user dragging). The core only
/// reads them to feed heuristic snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Creates a position from its two coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// One outgoing adjacency entry: the edge used and the node it leads to.
///
/// For a bidirectional edge both endpoints carry an entry pointing at the other endpoint, each
/// referring to the same [`EdgeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    /// The edge connecting the two nodes
    pub edge: EdgeId,
    /// The neighbouring node
    pub node: NodeId,
}

/// A node of the annotated graph.
///
/// The label and adjacency are topology and survive every run. The [`decoration`](Node::decoration)
/// is transient state written by algorithms and cleared by
/// [`AnnotatedGraph::reset_decorations`](crate::graph::AnnotatedGraph::reset_decorations).
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) label: String,
    pub(crate) position: Position,
    pub(crate) adjacency: Vec<Adjacent>,
    /// Algorithm decorations of this node
    pub decoration: NodeDecoration,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: String, position: Position) -> Self {
        Node {
            label,
            position,
            adjacency: Vec::new(),
            decoration: NodeDecoration::new(id),
        }
    }

    /// Returns the unique label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the position of this node.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the outgoing adjacency entries in insertion order.
    #[must_use]
    pub fn adjacency(&self) -> &[Adjacent] {
        &self.adjacency
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
