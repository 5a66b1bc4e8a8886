//! Non-interruptible reachability traversal.
//!
//! [`bfs`] walks a graph without touching any decoration. It backs reachability queries such as
//! [`AnnotatedGraph::reachable_from`](crate::graph::AnnotatedGraph::reachable_from) and
//! [`AnnotatedGraph::can_reach`](crate::graph::AnnotatedGraph::can_reach).

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Breadth-first search iterator over graph nodes.
///
/// Visits each node reachable from the start exactly once, all nodes at distance `d` before any
/// node at distance `d + 1`.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        BfsIterator {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }
        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// An out-of-range start node yields an empty iteration.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Examples
///
/// ```rust
/// use graphstep::graph::{traversal::bfs, AnnotatedGraph};
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node("A")?;
/// let b = graph.add_node("B")?;
/// let c = graph.add_node("C")?;
/// graph.add_edge(a, b, None, false)?;
/// graph.add_edge(b, c, None, false)?;
/// graph.add_edge(a, c, None, false)?;
///
/// let order: Vec<_> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), graphstep::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}
