//! Kosaraju's strongly connected components.

use crate::{
    algorithms::exit_order::{TwoPass, TwoPassRoot},
    engine::{Algorithm, Argument, Flattener, Routine, StepContext, StepSequence, StopLevel, Yield},
    graph::{AnnotatedGraph, Color, NodeId, Successors, Transposed},
    Result,
};

/// Kosaraju's algorithm.
///
/// The first pass builds the exit stack with a depth-first traversal over the whole graph. The
/// second pass pops it; every node that has not been assigned yet opens a new component and a
/// depth-first traversal of the transposed graph from it collects the rest of the component.
/// Members are coloured `AltC` and carry their `component_id`, starting from 1.
#[derive(Debug, Clone, Default)]
pub struct Kosaraju {
    arguments: [Argument; 0],
}

impl Kosaraju {
    /// Creates the algorithm. It takes no arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for Kosaraju {
    fn name(&self) -> &'static str {
        "Kosaraju"
    }

    fn full_name(&self) -> &'static str {
        "Kosaraju's algorithm"
    }

    fn short_description(&self) -> &'static str {
        "Strongly connected components of a directed graph"
    }

    fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut [Argument] {
        &mut self.arguments
    }

    fn validate_arguments(&self, _graph: &AnnotatedGraph) -> bool {
        true
    }

    fn execute(&self, _graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>> {
        Ok(Box::new(Flattener::new(
            TwoPass::default(),
            Box::new(TwoPassRoot::new(open_component)),
        )))
    }
}

fn open_component(shared: &mut TwoPass, node: NodeId) -> Box<dyn Routine<TwoPass>> {
    shared.component += 1;
    Box::new(Collect::new(node, true))
}

/// Visits `node` in the transposed graph and assigns it the current component.
struct Collect {
    node: NodeId,
    first: bool,
    predecessors: Option<Vec<NodeId>>,
    index: usize,
}

impl Collect {
    fn new(node: NodeId, first: bool) -> Self {
        Collect {
            node,
            first,
            predecessors: None,
            index: 0,
        }
    }
}

impl Routine<TwoPass> for Collect {
    fn resume(&mut self, cx: &mut StepContext<'_>, shared: &mut TwoPass) -> Option<Yield<TwoPass>> {
        let Some(predecessors) = &self.predecessors else {
            let mut predecessors: Vec<NodeId> =
                Transposed(&*cx.graph).successors(self.node).collect();
            predecessors.sort_unstable();
            predecessors.dedup();
            self.predecessors = Some(predecessors);

            let component = shared.component;
            let decoration = &mut cx.graph[self.node].decoration;
            decoration.color = Color::AltC;
            decoration.component_id = Some(component);

            let name = cx.name(self.node);
            let stack = shared.stack_text(cx.graph);
            return if self.first {
                cx.emit(
                    StopLevel::Always,
                    format!(
                        "The last element of the exit stack ({name}) starts a new component \
                         (C={component}). Exit stack: {stack}"
                    ),
                )
            } else {
                cx.emit(
                    StopLevel::Skippable,
                    format!(
                        "Reached {name} in the transposed graph from the first node of component \
                         {component} => C={component}. Exit stack: {stack}"
                    ),
                )
            }
            .map(Yield::Pause);
        };

        while let Some(&previous) = predecessors.get(self.index) {
            self.index += 1;
            if cx.graph[previous].decoration.color == Color::Done {
                return Some(Yield::Call(Box::new(Collect::new(previous, false))));
            }
        }
        None
    }
}
