//! Breadth-first search.

use std::collections::VecDeque;

use crate::{
    engine::{required_node, Algorithm, Argument, StepContext, StepSequence, StopLevel},
    graph::{AnnotatedGraph, Color, EdgeColor, NodeId},
    Result,
};

/// One observation of a [`BfsWalker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BfsEvent {
    /// The node was taken from the front of the queue
    Dequeued(NodeId),
    /// The node was reached for the first time and appended to the queue
    Discovered(NodeId),
}

/// Pull-based breadth-first walk over the decorated graph.
///
/// A neighbour is open while it is [`Color::Unvisited`] or [`Color::AltA`] (nodes reached by
/// Bellman-Ford are `AltA`, so the walk doubles as its reachability closure). The walker does
/// not colour nodes itself: the caller must close a node on [`BfsEvent::Discovered`] before
/// pulling again. It does record the predecessor and recolours the tree edges.
pub(crate) struct BfsWalker {
    queue: VecDeque<NodeId>,
    scanning: Option<(NodeId, usize)>,
}

impl BfsWalker {
    pub(crate) fn new(start: NodeId) -> Self {
        BfsWalker {
            queue: VecDeque::from([start]),
            scanning: None,
        }
    }

    pub(crate) fn next(&mut self, graph: &mut AnnotatedGraph) -> Option<BfsEvent> {
        if let Some((node, cursor)) = self.scanning.as_mut() {
            let node = *node;
            while let Some(&adj) = graph.adjacent(node).get(*cursor) {
                *cursor += 1;
                if !matches!(graph[adj.node].decoration.color, Color::Unvisited | Color::AltA) {
                    continue;
                }

                self.queue.push_back(adj.node);
                if let Some(previous) = graph[adj.node].decoration.source_edge {
                    graph[previous].decoration.color = EdgeColor::Plain;
                }
                graph[adj.edge].decoration.color = EdgeColor::Selected;
                let decoration = &mut graph[adj.node].decoration;
                decoration.source_node = Some(node);
                decoration.source_edge = Some(adj.edge);
                return Some(BfsEvent::Discovered(adj.node));
            }
            self.scanning = None;
        }

        let node = self.queue.pop_front()?;
        self.scanning = Some((node, 0));
        Some(BfsEvent::Dequeued(node))
    }

    pub(crate) fn queue_text(&self, graph: &AnnotatedGraph) -> String {
        graph.labels_text(&self.queue)
    }
}

/// Breadth-first search from a start node.
///
/// Colours the start node `Frontier`, then repeatedly dequeues a node (colouring it `Done`,
/// an [`StopLevel::Always`] checkpoint) and enqueues each still-open neighbour (colouring it
/// `Frontier` and its tree edge `Selected`, a [`StopLevel::Skippable`] step).
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    arguments: [Argument; 1],
}

impl BreadthFirstSearch {
    /// Name of the start node argument.
    pub const START: &'static str = "Start";

    /// Creates the algorithm with no start node selected.
    #[must_use]
    pub fn new() -> Self {
        BreadthFirstSearch {
            arguments: [Argument::node(Self::START)],
        }
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn full_name(&self) -> &'static str {
        "Breadth-first search"
    }

    fn short_description(&self) -> &'static str {
        "Visits every node reachable from the start node, nearest levels first"
    }

    fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut [Argument] {
        &mut self.arguments
    }

    fn validate_arguments(&self, graph: &AnnotatedGraph) -> bool {
        required_node(&self.arguments, Self::START, graph, self.name()).is_ok()
    }

    fn execute(&self, graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>> {
        let start = required_node(&self.arguments, Self::START, graph, self.name())?;
        Ok(Box::new(BfsSequence {
            start,
            walker: None,
        }))
    }
}

struct BfsSequence {
    start: NodeId,
    walker: Option<BfsWalker>,
}

impl StepSequence for BfsSequence {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let Some(walker) = self.walker.as_mut() else {
            cx.graph[self.start].decoration.color = Color::Frontier;
            self.walker = Some(BfsWalker::new(self.start));
            let name = cx.name(self.start);
            return cx.emit(
                StopLevel::Skippable,
                format!("Adding start node ({name}) to the queue: {name}"),
            );
        };

        match walker.next(cx.graph)? {
            BfsEvent::Discovered(node) => {
                cx.graph[node].decoration.color = Color::Frontier;
                let text = format!(
                    "Adding {} to the queue: {}",
                    cx.graph.label(node),
                    walker.queue_text(cx.graph)
                );
                cx.emit(StopLevel::Skippable, text)
            }
            BfsEvent::Dequeued(node) => {
                cx.graph[node].decoration.color = Color::Done;
                let text = format!(
                    "Visiting {} and removing it from the queue: {}",
                    cx.graph.label(node),
                    walker.queue_text(cx.graph)
                );
                cx.emit(StopLevel::Always, text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{ArgumentValue, Run},
        graph::EdgeId,
    };

    fn run_bfs(graph: &mut AnnotatedGraph, start: NodeId) -> Vec<String> {
        let mut bfs = BreadthFirstSearch::new();
        bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(start))
            .unwrap();
        let mut run = Run::start(graph, &bfs).unwrap();
        run.run_to_completion();
        run.into_events().entries().to_vec()
    }

    #[test]
    fn test_bfs_event_sequence() {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node("A").unwrap();
        let b = graph.add_node("B").unwrap();
        let c = graph.add_node("C").unwrap();
        let d = graph.add_node("D").unwrap();
        graph.add_edge(a, b, None, false).unwrap();
        graph.add_edge(a, c, None, false).unwrap();
        graph.add_edge(b, d, None, false).unwrap();
        graph.add_edge(c, d, None, false).unwrap();

        let events = run_bfs(&mut graph, a);
        assert_eq!(
            events,
            vec![
                "START",
                "Adding start node (A) to the queue: A",
                "Visiting A and removing it from the queue: ",
                "Adding B to the queue: B",
                "Adding C to the queue: B; C",
                "Visiting B and removing it from the queue: C",
                "Adding D to the queue: C; D",
                "Visiting C and removing it from the queue: D",
                "Visiting D and removing it from the queue: ",
                "END",
            ]
        );

        for node in [a, b, c, d] {
            assert_eq!(graph[node].decoration.color, Color::Done);
        }
        assert_eq!(graph[d].decoration.source_node, Some(b));
        assert_eq!(graph[EdgeId::new(2)].decoration.color, EdgeColor::Selected);
        assert_eq!(graph[EdgeId::new(3)].decoration.color, EdgeColor::Plain);
    }

    #[test]
    fn test_unreachable_nodes_stay_unvisited() {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node("A").unwrap();
        let b = graph.add_node("B").unwrap();
        let c = graph.add_node("C").unwrap();
        graph.add_edge(b, a, None, false).unwrap();
        graph.add_edge(b, c, None, false).unwrap();

        run_bfs(&mut graph, a);
        assert_eq!(graph[a].decoration.color, Color::Done);
        assert_eq!(graph[b].decoration.color, Color::Unvisited);
        assert_eq!(graph[c].decoration.color, Color::Unvisited);
    }

    #[test]
    fn test_walker_treats_alt_a_as_open() {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node("A").unwrap();
        let b = graph.add_node("B").unwrap();
        let c = graph.add_node("C").unwrap();
        graph.add_edge(a, b, None, false).unwrap();
        graph.add_edge(a, c, None, false).unwrap();
        graph[a].decoration.color = Color::AltB;
        graph[b].decoration.color = Color::AltA;
        graph[c].decoration.color = Color::Done;

        let mut walker = BfsWalker::new(a);
        assert_eq!(walker.next(&mut graph), Some(BfsEvent::Dequeued(a)));
        assert_eq!(walker.next(&mut graph), Some(BfsEvent::Discovered(b)));
        graph[b].decoration.color = Color::AltC;
        assert_eq!(walker.next(&mut graph), Some(BfsEvent::Dequeued(b)));
        assert_eq!(walker.next(&mut graph), None);
    }

    #[test]
    fn test_validation() {
        let mut graph = AnnotatedGraph::new();
        let mut bfs = BreadthFirstSearch::new();
        assert!(!bfs.validate_arguments(&graph));
        let a = graph.add_node("A").unwrap();
        bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(a))
            .unwrap();
        assert!(bfs.validate_arguments(&graph));
        bfs.reset_arguments();
        assert!(!bfs.validate_arguments(&graph));
        assert!(bfs.execute(&graph).is_err());
    }
}
