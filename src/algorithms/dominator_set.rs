//! A small set of nodes from which every node is reachable.

use crate::{
    algorithms::exit_order::{TwoPass, TwoPassRoot},
    engine::{Algorithm, Argument, Flattener, Routine, StepContext, StepSequence, StopLevel, Yield},
    graph::{AnnotatedGraph, Color, NodeId},
    Result,
};

/// Reachability cover ("dominator set").
///
/// The first pass builds the exit stack like [`Kosaraju`](crate::algorithms::Kosaraju). The
/// second pass pops it: a node not yet covered joins the set (`AltA`) and a forward depth-first
/// traversal from it colours everything it reaches `AltB`. Every node of the graph ends up in
/// the set or reachable from one of its members.
///
/// Popping in reverse exit order means each member starts from a source component of what is
/// left, which keeps the set small. It is not guaranteed to be of minimum size.
#[derive(Debug, Clone, Default)]
pub struct DominatorSet {
    arguments: [Argument; 0],
}

impl DominatorSet {
    /// Creates the algorithm. It takes no arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for DominatorSet {
    fn name(&self) -> &'static str {
        "Dominator set"
    }

    fn full_name(&self) -> &'static str {
        "Reachability cover (dominator set)"
    }

    fn short_description(&self) -> &'static str {
        "A small set of nodes from which every node of the graph can be reached"
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
            Box::new(TwoPassRoot::new(add_member)),
        )))
    }
}

fn add_member(_: &mut TwoPass, node: NodeId) -> Box<dyn Routine<TwoPass>> {
    Box::new(Cover::new(node, true))
}

/// Marks `node` as a member or as covered, then descends into uncovered successors.
struct Cover {
    node: NodeId,
    member: bool,
    next: Option<usize>,
}

impl Cover {
    fn new(node: NodeId, member: bool) -> Self {
        Cover {
            node,
            member,
            next: None,
        }
    }
}

impl Routine<TwoPass> for Cover {
    fn resume(&mut self, cx: &mut StepContext<'_>, shared: &mut TwoPass) -> Option<Yield<TwoPass>> {
        let Some(index) = self.next.as_mut() else {
            self.next = Some(0);
            let name = cx.name(self.node);
            let stack = shared.stack_text(cx.graph);
            let (color, level, text) = if self.member {
                (
                    Color::AltA,
                    StopLevel::Always,
                    format!(
                        "The last element of the exit stack ({name}) is in the dominator set. \
                         Exit stack: {stack}"
                    ),
                )
            } else {
                (
                    Color::AltB,
                    StopLevel::Skippable,
                    format!(
                        "Reached {name} from a member of the dominator set. Exit stack: {stack}"
                    ),
                )
            };
            cx.graph[self.node].decoration.color = color;
            return cx.emit(level, text).map(Yield::Pause);
        };

        while let Some(&adj) = cx.graph.adjacent(self.node).get(*index) {
            *index += 1;
            if cx.graph[adj.node].decoration.color == Color::Done {
                return Some(Yield::Call(Box::new(Cover::new(adj.node, false))));
            }
        }
        None
    }
}
