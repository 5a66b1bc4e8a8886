//! A* search between two nodes.

use std::cmp::Ordering;

use crate::{
    algorithms::heuristics::{evaluate_or_zero, Heuristic, HeuristicRegistry},
    engine::{required_node, Algorithm, Argument, StepContext, StepSequence, StopLevel},
    graph::{AnnotatedGraph, Color, EdgeColor, NodeId},
    utils::{format_distance, format_number, PriorityQueue},
    Error, Result,
};

/// A* search from a start node to an end node, guided by a named heuristic.
///
/// Queue entries are ordered by `F = G + H`, ties broken by the smaller `H`. Unlike
/// [`Dijkstra`](crate::algorithms::Dijkstra) a finished node may be reopened when a shorter path
/// to it turns up, which keeps the result optimal for consistent and merely admissible
/// heuristics alike.
///
/// Every node counts its outstanding queue entries in `enqueue_count`. After a node has been
/// expanded it rests as `Done` if no entry for it is left, `Frontier` otherwise. Reaching the
/// end node colours the whole path `AltA`.
///
/// # Examples
///
/// ```rust
/// use graphstep::prelude::*;
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node_at("A", 0.0, 0.0)?;
/// let b = graph.add_node_at("B", 3.0, 0.0)?;
/// let c = graph.add_node_at("C", 3.0, 4.0)?;
/// graph.add_edge(a, b, Some(3.0), true)?;
/// graph.add_edge(b, c, Some(4.0), true)?;
/// graph.add_edge(a, c, Some(9.0), true)?;
///
/// let mut astar = AStar::new(HeuristicRegistry::with_presets());
/// astar.set_argument(AStar::START, ArgumentValue::Node(a))?;
/// astar.set_argument(AStar::END, ArgumentValue::Node(c))?;
///
/// let mut run = Run::start(&mut graph, &astar)?;
/// run.run_to_completion();
/// drop(run);
///
/// assert_eq!(graph.path_to(c), vec![a, b, c]);
/// assert_eq!(graph[c].decoration.distance_from_start, Some(7.0));
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AStar {
    arguments: [Argument; 3],
    registry: HeuristicRegistry,
}

impl AStar {
    /// Name of the start node argument.
    pub const START: &'static str = "Start";
    /// Name of the end node argument.
    pub const END: &'static str = "End";
    /// Name of the heuristic argument.
    pub const HEURISTIC: &'static str = "Heuristic";

    /// Creates the algorithm over the heuristics in `registry`, selecting
    /// [`HeuristicRegistry::DEFAULT`].
    #[must_use]
    pub fn new(registry: HeuristicRegistry) -> Self {
        let mut astar = AStar {
            arguments: [
                Argument::node(Self::START),
                Argument::node(Self::END),
                Argument::heuristic(Self::HEURISTIC),
            ],
            registry,
        };
        astar.select_default_heuristic();
        astar
    }

    /// Returns the heuristics this instance can choose from.
    #[must_use]
    pub fn registry(&self) -> &HeuristicRegistry {
        &self.registry
    }

    /// Returns the registry mutably, e.g. to register a user heuristic.
    pub fn registry_mut(&mut self) -> &mut HeuristicRegistry {
        &mut self.registry
    }

    fn select_default_heuristic(&mut self) {
        self.arguments[2] = Argument::heuristic_with(Self::HEURISTIC, HeuristicRegistry::DEFAULT);
    }

    fn heuristic(&self) -> Result<Heuristic> {
        let name = self.arguments[2]
            .as_heuristic()
            .ok_or_else(|| Error::InvalidArguments(self.name().to_string()))?;
        self.registry
            .get(name)
            .ok_or_else(|| Error::UnknownHeuristic(name.to_string()))
    }

    fn endpoints(&self, graph: &AnnotatedGraph) -> Result<(NodeId, NodeId)> {
        let start = required_node(&self.arguments, Self::START, graph, self.name())?;
        let end = required_node(&self.arguments, Self::END, graph, self.name())?;
        if start == end {
            return Err(Error::InvalidArguments(self.name().to_string()));
        }
        Ok((start, end))
    }
}

impl Algorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn full_name(&self) -> &'static str {
        "A* search"
    }

    fn short_description(&self) -> &'static str {
        "Shortest path between two nodes, guided by a distance estimate"
    }

    fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut [Argument] {
        &mut self.arguments
    }

    fn reset_arguments(&mut self) {
        for arg in &mut self.arguments {
            arg.reset();
        }
        self.select_default_heuristic();
    }

    fn validate_arguments(&self, graph: &AnnotatedGraph) -> bool {
        self.endpoints(graph).is_ok() && self.heuristic().is_ok()
    }

    fn execute(&self, graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>> {
        let (start, end) = self.endpoints(graph)?;
        let heuristic = self.heuristic()?;
        Ok(Box::new(AStarSequence {
            start,
            end,
            heuristic,
            queue: PriorityQueue::with_comparator(Estimate::compare),
            state: State::Seed,
        }))
    }
}

/// Priority of a queue entry, captured when the entry is pushed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Estimate {
    f: f64,
    h: f64,
    g: f64,
}

impl Estimate {
    fn compare(a: &Estimate, b: &Estimate) -> Ordering {
        a.f.total_cmp(&b.f).then(a.h.total_cmp(&b.h))
    }
}

enum State {
    Seed,
    Pop,
    Relax { node: NodeId, index: usize },
    TracePath,
    Finished,
}

struct AStarSequence {
    start: NodeId,
    end: NodeId,
    heuristic: Heuristic,
    queue: PriorityQueue<NodeId, Estimate>,
    state: State,
}

impl AStarSequence {
    fn queue_text(&self, graph: &AnnotatedGraph) -> String {
        self.queue.render_with(
            |&node| graph.label(node).to_string(),
            |estimate| format_number(estimate.f),
        )
    }

    /// Evaluates `H`, records it on `node` and queues the node with its current `G`.
    fn enqueue(&mut self, graph: &mut AnnotatedGraph, node: NodeId) -> Estimate {
        let h = evaluate_or_zero(&self.heuristic, &graph.info(node), &graph.info(self.end));
        let decoration = &mut graph[node].decoration;
        let g = decoration.distance_from_start.unwrap_or_default();
        decoration.distance_to_end = Some(h);
        decoration.color = Color::Frontier;
        decoration.enqueue_count += 1;

        let estimate = Estimate { f: g + h, h, g };
        self.queue.push(node, estimate);
        estimate
    }

    fn seed(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        cx.graph[self.start].decoration.distance_from_start = Some(0.0);
        self.enqueue(cx.graph, self.start);
        self.state = State::Pop;
        let text = format!(
            "Adding start node ({}) to the priority queue: {}",
            cx.graph.label(self.start),
            self.queue_text(cx.graph)
        );
        cx.emit(StopLevel::Skippable, text)
    }

    fn pop(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let (node, estimate) = self.queue.pop()?;
        let decoration = &mut cx.graph[node].decoration;
        decoration.enqueue_count = decoration.enqueue_count.saturating_sub(1);

        if decoration
            .distance_from_start
            .is_some_and(|live| estimate.g > live)
        {
            let text = format!(
                "Skipping {} (F={}) taken from the priority queue, a better path was already \
                 found. Priority queue: {}",
                cx.graph.label(node),
                format_number(estimate.f),
                self.queue_text(cx.graph)
            );
            return cx.emit(StopLevel::Skippable, text);
        }

        if node == self.end {
            decoration.color = Color::AltA;
            self.state = State::TracePath;
            let text = format!(
                "Reached the target node ({}) in the priority queue",
                cx.graph.label(node)
            );
            return cx.emit(StopLevel::Always, text);
        }

        decoration.color = Color::Done;
        self.state = State::Relax { node, index: 0 };
        let text = format!(
            "Visiting {} (F={}) and removing it from the priority queue: {}",
            cx.graph.label(node),
            format_number(estimate.f),
            self.queue_text(cx.graph)
        );
        cx.emit(StopLevel::Always, text)
    }

    fn relax(&mut self, cx: &mut StepContext<'_>, node: NodeId, index: usize) -> Option<StopLevel> {
        let Some(&adj) = cx.graph.adjacent(node).get(index) else {
            let decoration = &mut cx.graph[node].decoration;
            decoration.color = if decoration.enqueue_count == 0 {
                Color::Done
            } else {
                Color::Frontier
            };
            self.state = State::Pop;
            return self.pop(cx);
        };
        self.state = State::Relax {
            node,
            index: index + 1,
        };

        let next = adj.node;
        let distance = cx.graph[node].decoration.distance_from_start.unwrap_or_default();
        let candidate = distance + cx.graph[adj.edge].weight();
        if !cx.graph[next].decoration.improves(candidate) {
            let text = format!(
                "{} (G={}) is not better than the current G ({}), not added to the priority \
                 queue. Priority queue: {}",
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
        let estimate = self.enqueue(cx.graph, next);

        let text = format!(
            "Adding {} (F={}) to the priority queue: {}",
            cx.graph.label(next),
            format_number(estimate.f),
            self.queue_text(cx.graph)
        );
        cx.emit(StopLevel::Skippable, text)
    }

    fn trace_path(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let path = cx.graph.path_to(self.end);
        for &node in &path {
            cx.graph[node].decoration.color = Color::AltA;
        }
        self.state = State::Finished;
        let text = format!(
            "Shortest path: {} (G={})",
            cx.graph.labels_text(&path),
            format_distance(cx.graph[self.end].decoration.distance_from_start)
        );
        cx.emit(StopLevel::Always, text)
    }
}

impl StepSequence for AStarSequence {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        match self.state {
            State::Seed => self.seed(cx),
            State::Pop => self.pop(cx),
            State::Relax { node, index } => self.relax(cx, node, index),
            State::TracePath => self.trace_path(cx),
            State::Finished => None,
        }
    }
}
