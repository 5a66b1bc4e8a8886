//! Bellman-Ford shortest paths with negative-cycle detection.

use crate::{
    algorithms::bfs::{BfsEvent, BfsWalker},
    engine::{required_node, Algorithm, Argument, StepContext, StepSequence, StopLevel},
    graph::{AnnotatedGraph, Color, EdgeColor, EdgeId, NodeId},
    utils::format_number,
    Result,
};

/// Bellman-Ford from a start node.
///
/// Relaxes every edge (both directions of a bidirectional one) in `N - 1` rounds. Nodes that
/// received a distance are coloured `AltA`. A final pass looks for edges that still relax: each
/// one exposes a negative cycle, whose vertices become `AltB` and every node reachable from
/// them `AltC`. All of those get `negative_infinity` set, since their distance is unbounded.
///
/// A negative bidirectional edge is a negative cycle on its own.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    arguments: [Argument; 1],
}

impl BellmanFord {
    /// Name of the start node argument.
    pub const START: &'static str = "Start";

    /// Creates the algorithm with no start node selected.
    #[must_use]
    pub fn new() -> Self {
        BellmanFord {
            arguments: [Argument::node(Self::START)],
        }
    }
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn full_name(&self) -> &'static str {
        "Bellman-Ford algorithm"
    }

    fn short_description(&self) -> &'static str {
        "Shortest paths from a start node, allowing negative edges and detecting negative cycles"
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
        let passes = graph
            .edges()
            .flat_map(|(id, edge)| edge.directions().map(move |(u, v)| Pass { edge: id, u, v }))
            .collect();
        Ok(Box::new(BellmanFordSequence {
            start,
            rounds: graph.node_count().saturating_sub(1),
            passes,
            restore: None,
            state: State::Seed,
        }))
    }
}

/// One direction of one edge.
#[derive(Clone, Copy)]
struct Pass {
    edge: EdgeId,
    u: NodeId,
    v: NodeId,
}

enum State {
    Seed,
    Check {
        round: usize,
        index: usize,
    },
    Relax {
        round: usize,
        index: usize,
    },
    Detect {
        index: usize,
    },
    Cycle {
        members: Vec<NodeId>,
        marked: usize,
        resume: usize,
    },
    Closure {
        members: Vec<NodeId>,
        resume: usize,
    },
    Finished,
}

struct BellmanFordSequence {
    start: NodeId,
    rounds: usize,
    passes: Vec<Pass>,
    /// Edge colour to put back before the next step
    restore: Option<(EdgeId, EdgeColor)>,
    state: State,
}

/// Returns the new distance of `v` if going through `u` is shorter than what `v` has.
fn relaxes(graph: &AnnotatedGraph, pass: Pass) -> Option<f64> {
    let candidate = graph[pass.u].decoration.distance_from_start? + graph[pass.edge].weight();
    graph[pass.v].decoration.improves(candidate).then_some(candidate)
}

/// Follows predecessor links from `u` (after `v` has been pointed at `u`) until a node repeats,
/// then returns the cycle through that node, starting with it.
///
/// # Errors
///
/// Returns [`Error::GraphError`](crate::Error::GraphError) if the chain breaks off before a node
/// repeats.
fn find_cycle(graph: &AnnotatedGraph, u: NodeId, v: NodeId) -> Result<Vec<NodeId>> {
    let predecessor = |node: NodeId| {
        graph[node].decoration.source_node.ok_or_else(|| {
            graph_error!(
                "{} has no predecessor while a negative cycle is traced",
                graph.label(node)
            )
        })
    };

    let mut visited = vec![false; graph.node_count()];
    visited[v.index()] = true;
    let mut current = u;
    while !visited[current.index()] {
        visited[current.index()] = true;
        current = predecessor(current)?;
    }

    let mut cycle = vec![current];
    let mut next = predecessor(current)?;
    while next != current {
        if cycle.len() > graph.node_count() {
            return Err(graph_error!(
                "predecessor chain of {} does not close",
                graph.label(current)
            ));
        }
        cycle.push(next);
        next = predecessor(next)?;
    }
    Ok(cycle)
}

impl BellmanFordSequence {
    fn check(&mut self, cx: &mut StepContext<'_>, round: usize, index: usize) -> Option<StopLevel> {
        let Some(&pass) = self.passes.get(index) else {
            self.state = if round + 1 < self.rounds {
                State::Check {
                    round: round + 1,
                    index: 0,
                }
            } else {
                State::Detect { index: 0 }
            };
            return cx.emit(StopLevel::Always, format!("End of relaxation #{}", round + 1));
        };

        let edge = &mut cx.graph[pass.edge].decoration;
        self.restore = Some((pass.edge, edge.color));
        edge.color = EdgeColor::Accent;
        self.state = State::Relax { round, index };
        let text = format!(
            "Relaxation #{}: checking the edge between {} and {}",
            round + 1,
            cx.graph.label(pass.u),
            cx.graph.label(pass.v)
        );
        cx.emit(StopLevel::Skippable, text)
    }

    fn relax(&mut self, cx: &mut StepContext<'_>, round: usize, index: usize) -> Option<StopLevel> {
        let pass = self.passes[index];
        self.state = State::Check {
            round,
            index: index + 1,
        };

        let Some(candidate) = relaxes(cx.graph, pass) else {
            let text = format!(
                "Relaxation #{}: the edge does not give a better path to {}, skipping it.",
                round + 1,
                cx.graph.label(pass.v)
            );
            return cx.emit(StopLevel::Skippable, text);
        };

        if let Some(previous) = cx.graph[pass.v].decoration.source_edge {
            cx.graph[previous].decoration.color = EdgeColor::Plain;
        }
        let decoration = &mut cx.graph[pass.v].decoration;
        decoration.distance_from_start = Some(candidate);
        decoration.color = Color::AltA;
        decoration.source_node = Some(pass.u);
        decoration.source_edge = Some(pass.edge);
        cx.graph[pass.edge].decoration.color = EdgeColor::Selected;
        self.restore = Some((pass.edge, EdgeColor::Selected));

        let text = format!(
            "Relaxation #{}: found a better path to {} (G={}), using the edge.",
            round + 1,
            cx.graph.label(pass.v),
            format_number(candidate)
        );
        cx.emit(StopLevel::Skippable, text)
    }

    fn detect(&mut self, cx: &mut StepContext<'_>, index: usize) -> Option<StopLevel> {
        for position in index..self.passes.len() {
            let pass = self.passes[position];
            if relaxes(cx.graph, pass).is_none() || cx.graph[pass.u].decoration.negative_infinity
            {
                continue;
            }

            let decoration = &mut cx.graph[pass.v].decoration;
            decoration.source_node = Some(pass.u);
            decoration.source_edge = Some(pass.edge);
            match find_cycle(cx.graph, pass.u, pass.v) {
                Ok(mut cycle) => {
                    // the node the walk stopped at is confirmed last
                    cycle.rotate_left(1);
                    self.state = State::Cycle {
                        members: cycle,
                        marked: 0,
                        resume: position + 1,
                    };
                    return self.mark_cycle(cx);
                }
                Err(err) => log::warn!("{err}, skipping the edge"),
            }
        }
        self.state = State::Finished;
        None
    }

    fn mark_cycle(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let State::Cycle {
            members,
            marked,
            resume,
        } = &mut self.state
        else {
            return None;
        };

        let node = members[*marked];
        let decoration = &mut cx.graph[node].decoration;
        decoration.negative_infinity = true;
        decoration.color = Color::AltB;
        *marked += 1;

        let name = cx.name(node);
        if *marked < members.len() {
            return cx.emit(
                StopLevel::Skippable,
                format!("{name} is a vertex of the negative cycle"),
            );
        }

        self.state = State::Closure {
            members: std::mem::take(members),
            resume: *resume,
        };
        cx.emit(
            StopLevel::Always,
            format!("{name} is a vertex of the negative cycle, the negative cycle is found"),
        )
    }

    fn closure(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let State::Closure { members, resume } = std::mem::replace(&mut self.state, State::Finished)
        else {
            return None;
        };
        // the node the cycle walk stopped at goes last
        let Some((&last, walked)) = members.split_last() else {
            self.state = State::Detect { index: resume };
            return self.advance(cx);
        };
        for &member in walked.iter().rev().chain(std::iter::once(&last)) {
            let mut walker = BfsWalker::new(member);
            while let Some(event) = walker.next(cx.graph) {
                let BfsEvent::Discovered(node) = event else {
                    continue;
                };
                let decoration = &mut cx.graph[node].decoration;
                if decoration.color != Color::AltB {
                    decoration.negative_infinity = true;
                    decoration.color = Color::AltC;
                }
            }
        }
        self.state = State::Detect { index: resume };
        cx.emit(
            StopLevel::Always,
            "Nodes reachable from the negative cycle have G = -\u{221e}",
        )
    }
}

impl StepSequence for BellmanFordSequence {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        if let Some((edge, color)) = self.restore.take() {
            cx.graph[edge].decoration.color = color;
        }

        match &self.state {
            State::Seed => {
                let decoration = &mut cx.graph[self.start].decoration;
                decoration.distance_from_start = Some(0.0);
                decoration.color = Color::AltA;
                self.state = if self.rounds == 0 {
                    State::Detect { index: 0 }
                } else {
                    State::Check { round: 0, index: 0 }
                };
                self.advance(cx)
            }
            &State::Check { round, index } => self.check(cx, round, index),
            &State::Relax { round, index } => self.relax(cx, round, index),
            &State::Detect { index } => self.detect(cx, index),
            State::Cycle { .. } => self.mark_cycle(cx),
            State::Closure { .. } => self.closure(cx),
            State::Finished => None,
        }
    }
}
