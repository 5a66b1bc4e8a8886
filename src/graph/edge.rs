//! Edge identifiers and edge storage for the annotated graph.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed index into the edge table of an
//! [`AnnotatedGraph`](crate::graph::AnnotatedGraph), and [`Edge`], the record holding the
//! endpoints, weight, direction flag and per-run decoration of one edge.

use std::fmt;

use crate::graph::{EdgeDecoration, NodeId};

/// A strongly-typed identifier for edges within an annotated graph.
///
/// Edge IDs are assigned sequentially starting from 0 in insertion order. Algorithms that
/// iterate "every edge" (Bellman-Ford, Kruskal's stable sort) follow that order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw edge index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// An edge of the annotated graph.
///
/// The weight defaults to `1.0` when the edge was added without one, which is what unweighted
/// algorithms see. When [`bidirectional`](Edge::bidirectional) is set, traversal and relaxation
/// consider both directions.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) weight: f64,
    pub(crate) bidirectional: bool,
    /// Algorithm decorations of this edge
    pub decoration: EdgeDecoration,
}

impl Edge {
    /// Returns the node this edge was declared from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the node this edge was declared to.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the weight of the edge.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if the edge may be traversed in both directions.
    #[must_use]
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Returns the endpoints as `(source, target)`.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }

    /// Returns `true` if this edge connects `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Returns the directions in which this edge can be relaxed.
    ///
    /// Always yields `(source, target)`; bidirectional edges additionally yield
    /// `(target, source)`.
    pub fn directions(&self) -> impl Iterator<Item = (NodeId, NodeId)> {
        let reverse = self.bidirectional.then_some((self.target, self.source));
        std::iter::once((self.source, self.target)).chain(reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(bidirectional: bool) -> Edge {
        Edge {
            source: NodeId::new(0),
            target: NodeId::new(1),
            weight: 2.5,
            bidirectional,
            decoration: EdgeDecoration::default(),
        }
    }

    #[test]
    fn test_edge_id_formatting() {
        assert_eq!(format!("{:?}", EdgeId::new(7)), "EdgeId(7)");
        assert_eq!(format!("{}", EdgeId::new(7)), "e7");
        let raw: usize = EdgeId::from(9usize).into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn test_edge_connects_either_direction() {
        let e = edge(false);
        assert!(e.connects(NodeId::new(0), NodeId::new(1)));
        assert!(e.connects(NodeId::new(1), NodeId::new(0)));
        assert!(!e.connects(NodeId::new(0), NodeId::new(2)));
    }

    #[test]
    fn test_edge_directions() {
        let directed: Vec<_> = edge(false).directions().collect();
        assert_eq!(directed, vec![(NodeId::new(0), NodeId::new(1))]);

        let both: Vec<_> = edge(true).directions().collect();
        assert_eq!(
            both,
            vec![
                (NodeId::new(0), NodeId::new(1)),
                (NodeId::new(1), NodeId::new(0))
            ]
        );
    }
}
