//! Per-run algorithm decorations of nodes and edges.
//!
//! Decorations are the transient layer an algorithm writes on top of the persistent topology:
//! colours, tentative distances, predecessor links, discovery and low-link times, component
//! ids, union-find parents. Every field is reset to its initial value before a run starts, so
//! no algorithm ever observes another algorithm's leftovers.

use strum::{Display, EnumIter};

use crate::graph::{EdgeId, NodeId};

/// Visual and algorithmic state of a node.
///
/// The first four variants carry the classic traversal meaning. The three alternative colours
/// are interpreted per algorithm:
///
/// | Colour | Meaning |
/// |--------|---------|
/// | [`Color::AltA`] | confirmed: reached by Bellman-Ford, on the A* path, articulation point, reachability-cover member |
/// | [`Color::AltB`] | alert: negative-cycle vertex, node covered by a reachability-cover member |
/// | [`Color::AltC`] | secondary: reachable from a negative cycle, member of a Kosaraju component |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Color {
    /// Not yet reached by the current run
    #[default]
    Unvisited,
    /// Discovered and waiting in a queue
    Frontier,
    /// Currently being processed (on the recursion stack)
    Active,
    /// Finished
    Done,
    /// First alternative colour (confirmed)
    AltA,
    /// Second alternative colour (alert)
    AltB,
    /// Third alternative colour (secondary)
    AltC,
}

/// Visual state of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum EdgeColor {
    /// Untouched
    #[default]
    Plain,
    /// Part of the result: tree edge, relaxed predecessor edge, kept spanning-forest edge
    Selected,
    /// Under inspection, or a detected bridge
    Accent,
    /// Tree edge that is about to be descended
    Pending,
}

/// Decorations attached to a single node.
///
/// All fields are public so that a renderer can read them after every step. The initial state
/// is produced by [`NodeDecoration::new`], which takes the owning node's id because the
/// union-find parent starts out as a self-reference.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecoration {
    /// Current colour
    pub color: Color,
    /// Tentative distance from the start node (`G`)
    pub distance_from_start: Option<f64>,
    /// Heuristic estimate to the end node (`H`, A* only)
    pub distance_to_end: Option<f64>,
    /// Set when the node is reachable from a negative-weight cycle
    pub negative_infinity: bool,
    /// Predecessor on the current best-known path
    pub source_node: Option<NodeId>,
    /// Edge leading from the predecessor to this node
    pub source_edge: Option<EdgeId>,
    /// Discovery time (Tarjan)
    pub discovery_time: Option<u32>,
    /// Low-link value (Tarjan)
    pub low_link: Option<u32>,
    /// Set once the low-link value is final
    pub show_low: bool,
    /// Strongly connected component id (Kosaraju)
    pub component_id: Option<u32>,
    /// Union-find parent (Kruskal), the node itself by default
    pub union_parent: NodeId,
    /// Union-find rank (Kruskal)
    pub rank: u32,
    /// Number of outstanding priority-queue entries for this node (A*)
    pub enqueue_count: u32,
}

impl NodeDecoration {
    /// Creates the initial decoration of the node `owner`.
    #[must_use]
    pub fn new(owner: NodeId) -> Self {
        NodeDecoration {
            color: Color::Unvisited,
            distance_from_start: None,
            distance_to_end: None,
            negative_infinity: false,
            source_node: None,
            source_edge: None,
            discovery_time: None,
            low_link: None,
            show_low: false,
            component_id: None,
            union_parent: owner,
            rank: 0,
            enqueue_count: 0,
        }
    }

    /// Returns the combined estimate `F = G + H`, if both parts are known.
    #[must_use]
    pub fn combined(&self) -> Option<f64> {
        Some(self.distance_from_start? + self.distance_to_end?)
    }

    /// Returns `true` if `candidate` is strictly better than the current `G`, or no `G` is
    /// known yet.
    #[must_use]
    pub fn improves(&self, candidate: f64) -> bool {
        self.distance_from_start.map_or(true, |g| candidate < g)
    }
}

/// Decorations attached to a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDecoration {
    /// Current colour
    pub color: EdgeColor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_initial_decoration() {
        let owner = NodeId::new(3);
        let deco = NodeDecoration::new(owner);
        assert_eq!(deco.color, Color::Unvisited);
        assert_eq!(deco.union_parent, owner);
        assert_eq!(deco.rank, 0);
        assert!(deco.distance_from_start.is_none());
        assert!(!deco.negative_infinity);
        assert!(deco.combined().is_none());
    }

    #[test]
    fn test_combined_requires_both_parts() {
        let mut deco = NodeDecoration::new(NodeId::new(0));
        deco.distance_from_start = Some(2.0);
        assert!(deco.combined().is_none());
        deco.distance_to_end = Some(1.5);
        assert_eq!(deco.combined(), Some(3.5));
    }

    #[test]
    fn test_improves() {
        let mut deco = NodeDecoration::new(NodeId::new(0));
        assert!(deco.improves(100.0));
        deco.distance_from_start = Some(5.0);
        assert!(deco.improves(4.0));
        assert!(!deco.improves(5.0));
        assert!(!deco.improves(6.0));
    }

    #[test]
    fn test_color_names() {
        let names: Vec<String> = Color::iter().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], "Unvisited");
        assert_eq!(EdgeColor::default().to_string(), "Plain");
    }
}
