//! The annotated graph: topology plus per-run decorations.
//!
//! [`AnnotatedGraph`] stores nodes and edges in insertion-ordered tables indexed by
//! [`NodeId`]/[`EdgeId`], keeps outgoing and incoming adjacency lists per node, and carries a
//! [`NodeDecoration`](crate::graph::NodeDecoration)/[`EdgeDecoration`](crate::graph::EdgeDecoration)
//! on every entity. Algorithms never create or destroy topology; they only reset and mutate
//! decorations.

use std::{
    collections::HashMap,
    ops::{Index, IndexMut},
};

use crate::{
    graph::{
        traversal::bfs, Adjacent, Edge, EdgeDecoration, EdgeId, GraphBase, Node, NodeDecoration,
        NodeId, Position, Predecessors, Successors,
    },
    utils::DisjointSet,
    Error, Result,
};

/// Read-only snapshot of a node handed to heuristic functions.
///
/// Only the label, the current `G` value and the position are exposed; heuristics get no other
/// access to graph internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInfo<'a> {
    /// Label of the node
    pub id: &'a str,
    /// Tentative distance from the start, if known
    pub g: Option<f64>,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// A graph whose nodes and edges carry algorithm decorations.
///
/// # Topology Rules
///
/// - Node labels are unique and non-empty
/// - Self-loops are rejected
/// - At most one edge may connect a pair of nodes, regardless of direction
/// - Edge weights must be finite; a missing weight means `1.0`
///
/// # Examples
///
/// ```rust
/// use graphstep::{AnnotatedGraph, Color};
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node_at("A", 0.0, 0.0)?;
/// let b = graph.add_node_at("B", 3.0, 4.0)?;
/// let ab = graph.add_edge(a, b, Some(5.0), true)?;
///
/// assert_eq!(graph.node_by_label("B"), Some(b));
/// assert_eq!(graph[ab].weight(), 5.0);
/// assert!(graph.is_weighted());
///
/// graph[a].decoration.color = Color::Done;
/// graph.reset_decorations();
/// assert_eq!(graph[a].decoration.color, Color::Unvisited);
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnotatedGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Incoming adjacency per node, mirror image of each node's outgoing list
    incoming: Vec<Vec<Adjacent>>,
    labels: HashMap<String, NodeId>,
    weighted: bool,
}

impl AnnotatedGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the origin.
    ///
    /// # Arguments
    ///
    /// * `label` - Unique, non-empty label; surrounding whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabel`] for an empty label and [`Error::DuplicateNode`] if the
    /// label is already taken.
    pub fn add_node(&mut self, label: impl AsRef<str>) -> Result<NodeId> {
        self.add_node_at(label, 0.0, 0.0)
    }

    /// Adds a node at the given position.
    ///
    /// # Errors
    ///
    /// Same as [`add_node`](Self::add_node).
    pub fn add_node_at(&mut self, label: impl AsRef<str>, x: f64, y: f64) -> Result<NodeId> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(Error::InvalidLabel);
        }
        if self.labels.contains_key(label) {
            return Err(Error::DuplicateNode(label.to_string()));
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(Node::new(id, label.to_string(), Position::new(x, y)));
        self.incoming.push(Vec::new());
        self.labels.insert(label.to_string(), id);
        Ok(id)
    }

    /// Adds an edge between two existing nodes.
    ///
    /// A bidirectional edge is registered in the adjacency of both endpoints. The first edge
    /// added with an explicit weight marks the graph as weighted.
    ///
    /// # Arguments
    ///
    /// * `source` - Node the edge starts at
    /// * `target` - Node the edge leads to
    /// * `weight` - Edge weight, `None` for the unweighted default of `1.0`
    /// * `bidirectional` - Whether the edge can be traversed in both directions
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownNode`] if either endpoint is not part of the graph
    /// - [`Error::SelfLoop`] if `source == target`
    /// - [`Error::DuplicateEdge`] if the pair is already connected in either direction
    /// - [`Error::InvalidWeight`] for a NaN or infinite weight
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Option<f64>,
        bidirectional: bool,
    ) -> Result<EdgeId> {
        if !self.contains_node(source) {
            return Err(Error::UnknownNode(source));
        }
        if !self.contains_node(target) {
            return Err(Error::UnknownNode(target));
        }
        if source == target {
            return Err(Error::SelfLoop(self.label(source).to_string()));
        }
        if self.find_edge(source, target).is_some() {
            return Err(Error::DuplicateEdge {
                source: self.label(source).to_string(),
                target: self.label(target).to_string(),
            });
        }
        if let Some(w) = weight {
            if !w.is_finite() {
                return Err(Error::InvalidWeight(w));
            }
            self.weighted = true;
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight: weight.unwrap_or(1.0),
            bidirectional,
            decoration: EdgeDecoration::default(),
        });

        self.link(source, target, id);
        if bidirectional {
            self.link(target, source, id);
        }
        Ok(id)
    }

    fn link(&mut self, from: NodeId, to: NodeId, edge: EdgeId) {
        self.nodes[from.index()]
            .adjacency
            .push(Adjacent { edge, node: to });
        self.incoming[to.index()].push(Adjacent { edge, node: from });
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.incoming.clear();
        self.labels.clear();
        self.weighted = false;
    }

    /// Moves a node to a new position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node is not part of the graph.
    pub fn set_position(&mut self, node: NodeId, x: f64, y: f64) -> Result<()> {
        let entry = self.node_mut(node).ok_or(Error::UnknownNode(node))?;
        entry.position = Position::new(x, y);
        Ok(())
    }

    /// Changes the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdge`] if the edge is not part of the graph and
    /// [`Error::InvalidWeight`] for a NaN or infinite weight.
    pub fn set_weight(&mut self, edge: EdgeId, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight(weight));
        }
        let entry = self.edge_mut(edge).ok_or(Error::UnknownEdge(edge))?;
        entry.weight = weight;
        self.weighted = true;
        Ok(())
    }

    /// Clears every node and edge decoration back to its initial state.
    ///
    /// Must be called between runs; the run driver does so automatically.
    pub fn reset_decorations(&mut self) {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            node.decoration = NodeDecoration::new(NodeId::new(index));
        }
        for edge in &mut self.edges {
            edge.decoration = EdgeDecoration::default();
        }
    }

    /// Returns `true` if at least one edge was added with an explicit weight.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the node with the given identifier.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    /// Returns the node with the given identifier mutably.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the edge with the given identifier.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Returns the edge with the given identifier mutably.
    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(edge.index())
    }

    /// Looks up a node by its label.
    #[must_use]
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label.trim()).copied()
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the graph.
    #[must_use]
    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].label
    }

    /// Returns the edge connecting `a` and `b` in either direction, if any.
    #[must_use]
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.edges
            .iter()
            .position(|edge| edge.connects(a, b))
            .map(EdgeId::new)
    }

    /// Returns the outgoing adjacency of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the graph.
    #[must_use]
    pub fn adjacent(&self, node: NodeId) -> &[Adjacent] {
        &self.nodes[node.index()].adjacency
    }

    /// Returns the incoming adjacency of a node: every `(edge, node)` whose adjacency points
    /// here.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the graph.
    #[must_use]
    pub fn incoming(&self, node: NodeId) -> &[Adjacent] {
        &self.incoming[node.index()]
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the identifier refers to a node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Returns an iterator over all node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all edge identifiers in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns an iterator over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Returns an iterator over all edges with their identifiers.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId::new(i), edge))
    }

    /// Returns the heuristic snapshot of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the graph.
    #[must_use]
    pub fn info(&self, node: NodeId) -> NodeInfo<'_> {
        let entry = &self.nodes[node.index()];
        NodeInfo {
            id: &entry.label,
            g: entry.decoration.distance_from_start,
            x: entry.position.x,
            y: entry.position.y,
        }
    }

    /// Walks the predecessor links back from `node`.
    ///
    /// The returned path starts at the first node without a predecessor and ends at `node`.
    /// The walk stops early if a predecessor repeats, so a cyclic chain (left behind by a
    /// negative cycle) still terminates.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(step) = current {
            if seen[step.index()] {
                break;
            }
            seen[step.index()] = true;
            path.push(step);
            current = self.nodes[step.index()].decoration.source_node;
        }
        path.reverse();
        path
    }

    /// Returns every node reachable from `start` (including `start`), in breadth-first order.
    #[must_use]
    pub fn reachable_from(&self, start: NodeId) -> Vec<NodeId> {
        bfs(self, start).collect()
    }

    /// Returns `true` if a directed path leads from `from` to `to`.
    #[must_use]
    pub fn can_reach(&self, from: NodeId, to: NodeId) -> bool {
        bfs(self, from).any(|node| node == to)
    }

    /// Renders node labels joined by `"; "`.
    pub(crate) fn labels_text<'a>(&self, nodes: impl IntoIterator<Item = &'a NodeId>) -> String {
        crate::utils::join_text(nodes.into_iter().map(|&node| self.label(node)))
    }
}

impl Index<NodeId> for AnnotatedGraph {
    type Output = Node;

    fn index(&self, node: NodeId) -> &Node {
        &self.nodes[node.index()]
    }
}

impl IndexMut<NodeId> for AnnotatedGraph {
    fn index_mut(&mut self, node: NodeId) -> &mut Node {
        &mut self.nodes[node.index()]
    }
}

impl Index<EdgeId> for AnnotatedGraph {
    type Output = Edge;

    fn index(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.index()]
    }
}

impl IndexMut<EdgeId> for AnnotatedGraph {
    fn index_mut(&mut self, edge: EdgeId) -> &mut Edge {
        &mut self.edges[edge.index()]
    }
}

impl GraphBase for AnnotatedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl Successors for AnnotatedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.nodes[node.index()].adjacency.iter().map(|adj| adj.node)
    }
}

impl Predecessors for AnnotatedGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().map(|adj| adj.node)
    }
}

/// Union-find over the node decorations (`union_parent`, `rank`).
impl DisjointSet for AnnotatedGraph {
    fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node.index()].decoration.union_parent
    }

    fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        self.nodes[node.index()].decoration.union_parent = parent;
    }

    fn rank(&self, node: NodeId) -> u32 {
        self.nodes[node.index()].decoration.rank
    }

    fn set_rank(&mut self, node: NodeId, rank: u32) {
        self.nodes[node.index()].decoration.rank = rank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Color, EdgeColor};

    fn triangle() -> (AnnotatedGraph, [NodeId; 3]) {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node_at("A", 0.0, 0.0).unwrap();
        let b = graph.add_node_at("B", 1.0, 0.0).unwrap();
        let c = graph.add_node_at("C", 0.0, 1.0).unwrap();
        graph.add_edge(a, b, None, false).unwrap();
        graph.add_edge(b, c, None, true).unwrap();
        graph.add_edge(c, a, None, false).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn test_add_node_rejects_duplicates_and_empty_labels() {
        let mut graph = AnnotatedGraph::new();
        graph.add_node("A").unwrap();
        assert!(matches!(graph.add_node(" A "), Err(Error::DuplicateNode(l)) if l == "A"));
        assert!(matches!(graph.add_node("   "), Err(Error::InvalidLabel)));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_rejections() {
        let (mut graph, [a, b, _]) = triangle();
        assert!(matches!(
            graph.add_edge(a, a, None, false),
            Err(Error::SelfLoop(_))
        ));
        assert!(matches!(
            graph.add_edge(b, a, None, false),
            Err(Error::DuplicateEdge { .. })
        ));
        assert!(matches!(
            graph.add_edge(a, NodeId::new(17), None, false),
            Err(Error::UnknownNode(_))
        ));
        let d = graph.add_node("D").unwrap();
        assert!(matches!(
            graph.add_edge(a, d, Some(f64::NAN), false),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_adjacency_and_incoming() {
        let (graph, [a, b, c]) = triangle();
        let succ_b: Vec<NodeId> = graph.successors(b).collect();
        assert_eq!(succ_b, vec![c]);
        let succ_c: Vec<NodeId> = graph.successors(c).collect();
        assert_eq!(succ_c, vec![b, a]);
        let pred_b: Vec<NodeId> = graph.predecessors(b).collect();
        assert_eq!(pred_b, vec![a, c]);
        assert_eq!(graph.incoming(a).len(), 1);
    }

    #[test]
    fn test_weighted_flag_and_default_weight() {
        let (mut graph, [a, _, _]) = triangle();
        assert!(!graph.is_weighted());
        assert_eq!(graph[EdgeId::new(0)].weight(), 1.0);
        let d = graph.add_node("D").unwrap();
        graph.add_edge(a, d, Some(-2.0), false).unwrap();
        assert!(graph.is_weighted());

        graph.set_weight(EdgeId::new(0), 4.0).unwrap();
        assert_eq!(graph[EdgeId::new(0)].weight(), 4.0);
        assert!(matches!(
            graph.set_weight(EdgeId::new(99), 1.0),
            Err(Error::UnknownEdge(_))
        ));
    }

    #[test]
    fn test_reset_decorations() {
        let (mut graph, [a, b, _]) = triangle();
        graph[a].decoration.color = Color::Done;
        graph[a].decoration.distance_from_start = Some(3.0);
        graph[a].decoration.union_parent = b;
        graph[EdgeId::new(1)].decoration.color = EdgeColor::Selected;

        graph.reset_decorations();

        assert_eq!(graph[a].decoration, NodeDecoration::new(a));
        assert_eq!(graph[EdgeId::new(1)].decoration.color, EdgeColor::Plain);
    }

    #[test]
    fn test_path_to_follows_predecessors_and_stops_on_cycles() {
        let (mut graph, [a, b, c]) = triangle();
        graph[b].decoration.source_node = Some(a);
        graph[c].decoration.source_node = Some(b);
        assert_eq!(graph.path_to(c), vec![a, b, c]);

        graph[a].decoration.source_node = Some(c);
        assert_eq!(graph.path_to(c).len(), 3);
    }

    #[test]
    fn test_info_snapshot() {
        let (mut graph, [_, b, _]) = triangle();
        graph[b].decoration.distance_from_start = Some(4.0);
        let info = graph.info(b);
        assert_eq!(info.id, "B");
        assert_eq!(info.g, Some(4.0));
        assert_eq!((info.x, info.y), (1.0, 0.0));
    }

    #[test]
    fn test_reachability() {
        let (mut graph, [a, b, c]) = triangle();
        let d = graph.add_node("D").unwrap();
        assert_eq!(graph.reachable_from(a), vec![a, b, c]);
        assert!(graph.can_reach(c, b));
        assert!(!graph.can_reach(a, d));
    }

    #[test]
    fn test_clear_and_positions() {
        let (mut graph, [a, _, _]) = triangle();
        graph.set_position(a, 5.0, 6.0).unwrap();
        assert_eq!(graph[a].position(), Position::new(5.0, 6.0));
        assert!(graph.set_position(NodeId::new(40), 0.0, 0.0).is_err());
        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.node_by_label("A").is_none());
    }
}
