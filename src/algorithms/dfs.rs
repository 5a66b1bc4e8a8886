//! Depth-first search, driven through the recursion flattener.

use crate::{
    engine::{
        required_node, Algorithm, Argument, Flattener, Routine, StepContext, StepSequence,
        StopLevel, Yield,
    },
    graph::{AnnotatedGraph, Color, EdgeColor, NodeId},
    Result,
};

/// Depth-first search from a start node.
///
/// Entering a node colours it `Active`, leaving it colours it `Done`; both are checkpoints.
/// Every tree edge is coloured `Selected` right before the traversal descends along it.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    arguments: [Argument; 1],
}

impl DepthFirstSearch {
    /// Name of the start node argument.
    pub const START: &'static str = "Start";

    /// Creates the algorithm with no start node selected.
    #[must_use]
    pub fn new() -> Self {
        DepthFirstSearch {
            arguments: [Argument::node(Self::START)],
        }
    }
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn full_name(&self) -> &'static str {
        "Depth-first search"
    }

    fn short_description(&self) -> &'static str {
        "Follows each branch from the start node as deep as possible before backtracking"
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
        Ok(Box::new(Flattener::new((), Box::new(Visit::new(start)))))
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Enter,
    Scan(usize),
    Exit,
    Finished,
}

/// One recursive visit of a node.
struct Visit {
    node: NodeId,
    phase: Phase,
}

impl Visit {
    fn new(node: NodeId) -> Self {
        Visit {
            node,
            phase: Phase::Enter,
        }
    }
}

impl Routine<()> for Visit {
    fn resume(&mut self, cx: &mut StepContext<'_>, _: &mut ()) -> Option<Yield<()>> {
        loop {
            match self.phase {
                Phase::Enter => {
                    cx.graph[self.node].decoration.color = Color::Active;
                    self.phase = Phase::Scan(0);
                    let text = format!("Entering node {}", cx.graph.label(self.node));
                    return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                }
                Phase::Scan(index) => {
                    let Some(&adj) = cx.graph.adjacent(self.node).get(index) else {
                        self.phase = Phase::Exit;
                        continue;
                    };
                    self.phase = Phase::Scan(index + 1);
                    if cx.graph[adj.node].decoration.color != Color::Unvisited {
                        continue;
                    }
                    cx.graph[adj.edge].decoration.color = EdgeColor::Selected;
                    let decoration = &mut cx.graph[adj.node].decoration;
                    decoration.source_node = Some(self.node);
                    decoration.source_edge = Some(adj.edge);
                    return Some(Yield::Call(Box::new(Visit::new(adj.node))));
                }
                Phase::Exit => {
                    cx.graph[self.node].decoration.color = Color::Done;
                    self.phase = Phase::Finished;
                    let text = format!("Leaving node {}", cx.graph.label(self.node));
                    return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                }
                Phase::Finished => return None,
            }
        }
    }
}
