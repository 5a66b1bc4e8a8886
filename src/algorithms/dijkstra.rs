//! Dijkstra's single-source shortest paths.

use crate::{
    engine::{required_node, Algorithm, Argument, StepContext, StepSequence, StopLevel},
    graph::{AnnotatedGraph, Color, EdgeColor, NodeId},
    utils::{format_distance, format_number, PriorityQueue},
    Result,
};

/// Dijkstra's algorithm from a start node.
///
/// Requires non-negative edge weights. Every node reachable from the start ends up `Done` with
/// its shortest distance in `distance_from_start`, and the `Selected` edges form the
/// shortest-path tree.
///
/// # Stale Entries
///
/// Improving a node pushes a new queue entry without removing the old one. When an entry is
/// popped whose recorded distance exceeds the node's live distance, or whose node is already
/// `Done`, it is skipped without touching any decoration.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    arguments: [Argument; 1],
}

impl Dijkstra {
    /// Name of the start node argument.
    pub const START: &'static str = "Start";

    /// Creates the algorithm with no start node selected.
    #[must_use]
    pub fn new() -> Self {
        Dijkstra {
            arguments: [Argument::node(Self::START)],
        }
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn full_name(&self) -> &'static str {
        "Dijkstra's algorithm"
    }

    fn short_description(&self) -> &'static str {
        "Shortest paths from a start node to every other node (no negative edges)"
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
        Ok(Box::new(DijkstraSequence {
            start,
            queue: PriorityQueue::new(),
            state: State::Seed,
        }))
    }
}

enum State {
    Seed,
    Pop,
    Relax {
        node: NodeId,
        distance: f64,
        index: usize,
    },
}

struct DijkstraSequence {
    start: NodeId,
    queue: PriorityQueue<NodeId, f64>,
    state: State,
}

impl DijkstraSequence {
    fn queue_text(&self, graph: &AnnotatedGraph) -> String {
        self.queue
            .render_with(|&node| graph.label(node).to_string(), |&d| format_number(d))
    }

    fn pop(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let (node, distance) = self.queue.pop()?;
        let decoration = &cx.graph[node].decoration;
        let stale = decoration
            .distance_from_start
            .is_some_and(|live| distance > live);

        if stale || decoration.color == Color::Done {
            let reason = if stale {
                "a better path was already found"
            } else {
                "it was already visited"
            };
            let text = format!(
                "Skipping {} (G={}) taken from the priority queue, {reason}. Priority queue: {}",
                cx.graph.label(node),
                format_number(distance),
                self.queue_text(cx.graph)
            );
            return cx.emit(StopLevel::Skippable, text);
        }

        cx.graph[node].decoration.color = Color::Done;
        self.state = State::Relax {
            node,
            distance,
            index: 0,
        };
        let text = format!(
            "Visiting {} (G={}) and removing it from the priority queue: {}",
            cx.graph.label(node),
            format_number(distance),
            self.queue_text(cx.graph)
        );
        cx.emit(StopLevel::Always, text)
    }

    fn relax(
        &mut self,
        cx: &mut StepContext<'_>,
        node: NodeId,
        distance: f64,
        mut index: usize,
    ) -> Option<StopLevel> {
        loop {
            let Some(&adj) = cx.graph.adjacent(node).get(index) else {
                self.state = State::Pop;
                let text = format!("Finished relaxing the edges of {}", cx.graph.label(node));
                return cx.emit(StopLevel::Always, text);
            };
            index += 1;

            let next = adj.node;
            if cx.graph[next].decoration.color == Color::Done {
                continue;
            }
            self.state = State::Relax {
                node,
                distance,
                index,
            };

            cx.graph[next].decoration.color = Color::Frontier;
            let candidate = distance + cx.graph[adj.edge].weight();
            if !cx.graph[next].decoration.improves(candidate) {
                let text = format!(
                    "{} (G={}) is not better than the current G ({}), not added to the \
                     priority queue. Priority queue: {}",
                    cx.graph.label(next),
                    format_number(candidate),
                    format_distance(cx.graph[next].decoration.distance_from_start),
                    self.queue_text(cx.graph)
                );
                return cx.emit(StopLevel::Skippable, text);
            }

            if let Some(previous) = cx.graph[next].decoration.source_edge {
                cx.graph[previous].decoration.color = EdgeColor::Plain;
            }
            cx.graph[adj.edge].decoration.color = EdgeColor::Selected;
            let decoration = &mut cx.graph[next].decoration;
            decoration.distance_from_start = Some(candidate);
            decoration.source_node = Some(node);
            decoration.source_edge = Some(adj.edge);
            self.queue.push(next, candidate);

            let text = format!(
                "Adding {} (G={}) to the priority queue: {}",
                cx.graph.label(next),
                format_number(candidate),
                self.queue_text(cx.graph)
            );
            return cx.emit(StopLevel::Skippable, text);
        }
    }
}

impl StepSequence for DijkstraSequence {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        match self.state {
            State::Seed => {
                let decoration = &mut cx.graph[self.start].decoration;
                decoration.distance_from_start = Some(0.0);
                decoration.color = Color::Frontier;
                self.queue.push(self.start, 0.0);
                self.state = State::Pop;
                let text = format!(
                    "Adding start node ({}) to the priority queue: {}",
                    cx.graph.label(self.start),
                    self.queue_text(cx.graph)
                );
                cx.emit(StopLevel::Skippable, text)
            }
            State::Pop => self.pop(cx),
            State::Relax {
                node,
                distance,
                index,
            } => self.relax(cx, node, distance, index),
        }
    }
}
