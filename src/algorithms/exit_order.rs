//! The first pass shared by Kosaraju and the reachability cover.
//!
//! A depth-first traversal from every still-unvisited node pushes each node onto an exit stack
//! as it is left. The second pass then pops that stack, handing every node that is still `Done`
//! to an algorithm-specific routine and skipping the rest.

use crate::{
    engine::{Routine, StepContext, StopLevel, Yield},
    graph::{AnnotatedGraph, Color, NodeId},
};

/// State shared by all routines of a two-pass run.
#[derive(Debug, Default)]
pub(crate) struct TwoPass {
    /// Nodes in exit order, the most recently left on top
    pub(crate) stack: Vec<NodeId>,
    /// Number of components opened so far (Kosaraju only)
    pub(crate) component: u32,
}

impl TwoPass {
    /// Renders the exit stack top first.
    pub(crate) fn stack_text(&self, graph: &AnnotatedGraph) -> String {
        graph.labels_text(self.stack.iter().rev())
    }
}

/// Builds the routine that handles a popped node which is still `Done`.
pub(crate) type SecondPass = fn(&mut TwoPass, NodeId) -> Box<dyn Routine<TwoPass>>;

#[derive(Clone, Copy)]
enum Pass {
    First(usize),
    Second,
}

/// Root routine: runs the first pass over every node, then drains the exit stack.
pub(crate) struct TwoPassRoot {
    pass: Pass,
    second: SecondPass,
}

impl TwoPassRoot {
    pub(crate) fn new(second: SecondPass) -> Self {
        TwoPassRoot {
            pass: Pass::First(0),
            second,
        }
    }
}

impl Routine<TwoPass> for TwoPassRoot {
    fn resume(&mut self, cx: &mut StepContext<'_>, shared: &mut TwoPass) -> Option<Yield<TwoPass>> {
        loop {
            match self.pass {
                Pass::First(index) if index < cx.graph.node_count() => {
                    self.pass = Pass::First(index + 1);
                    let node = NodeId::new(index);
                    if cx.graph[node].decoration.color == Color::Unvisited {
                        return Some(Yield::Call(Box::new(ExitOrderVisit::new(node))));
                    }
                }
                Pass::First(_) => self.pass = Pass::Second,
                Pass::Second => {
                    let node = shared.stack.pop()?;
                    if cx.graph[node].decoration.color == Color::Done {
                        return Some(Yield::Call((self.second)(shared, node)));
                    }
                    let text = format!(
                        "The last element of the exit stack ({}) was already visited, skipping \
                         it. Exit stack: {}",
                        cx.graph.label(node),
                        shared.stack_text(cx.graph)
                    );
                    return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Enter,
    Scan(usize),
    Exit,
    Finished,
}

/// One recursive visit of the first pass.
struct ExitOrderVisit {
    node: NodeId,
    phase: Phase,
}

impl ExitOrderVisit {
    fn new(node: NodeId) -> Self {
        ExitOrderVisit {
            node,
            phase: Phase::Enter,
        }
    }
}

impl Routine<TwoPass> for ExitOrderVisit {
    fn resume(&mut self, cx: &mut StepContext<'_>, shared: &mut TwoPass) -> Option<Yield<TwoPass>> {
        loop {
            match self.phase {
                Phase::Enter => {
                    cx.graph[self.node].decoration.color = Color::Active;
                    self.phase = Phase::Scan(0);
                    let text = format!(
                        "Building the exit stack: entering {}. Exit stack: {}",
                        cx.graph.label(self.node),
                        shared.stack_text(cx.graph)
                    );
                    return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                }
                Phase::Scan(index) => {
                    let Some(&adj) = cx.graph.adjacent(self.node).get(index) else {
                        self.phase = Phase::Exit;
                        continue;
                    };
                    self.phase = Phase::Scan(index + 1);
                    if cx.graph[adj.node].decoration.color == Color::Unvisited {
                        return Some(Yield::Call(Box::new(ExitOrderVisit::new(adj.node))));
                    }
                }
                Phase::Exit => {
                    cx.graph[self.node].decoration.color = Color::Done;
                    shared.stack.push(self.node);
                    self.phase = Phase::Finished;
                    let text = format!(
                        "Building the exit stack: leaving {}. Exit stack: {}",
                        cx.graph.label(self.node),
                        shared.stack_text(cx.graph)
                    );
                    return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                }
                Phase::Finished => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EventLog, Flattener, StepSequence};

    /// Second pass that only records the popped node.
    struct Record(NodeId);

    impl Routine<TwoPass> for Record {
        fn resume(&mut self, cx: &mut StepContext<'_>, _: &mut TwoPass) -> Option<Yield<TwoPass>> {
            if cx.graph[self.0].decoration.color == Color::AltA {
                return None;
            }
            cx.graph[self.0].decoration.color = Color::AltA;
            let text = format!("second {}", cx.graph.label(self.0));
            cx.emit(StopLevel::Always, text).map(Yield::Pause)
        }
    }

    fn record(_: &mut TwoPass, node: NodeId) -> Box<dyn Routine<TwoPass>> {
        Box::new(Record(node))
    }

    #[test]
    fn test_exit_order_and_second_pass() {
        let mut graph = AnnotatedGraph::new();
        let a = graph.add_node("A").unwrap();
        let b = graph.add_node("B").unwrap();
        let c = graph.add_node("C").unwrap();
        graph.add_edge(a, b, None, false).unwrap();
        graph.add_edge(c, a, None, false).unwrap();

        let mut events = EventLog::new();
        let mut seq = Flattener::new(TwoPass::default(), Box::new(TwoPassRoot::new(record)));
        {
            let mut cx = StepContext::new(&mut graph, &mut events);
            while seq.advance(&mut cx).is_some() {}
        }

        assert_eq!(
            events.entries()[1..],
            [
                "Building the exit stack: entering A. Exit stack: ",
                "Building the exit stack: entering B. Exit stack: ",
                "Building the exit stack: leaving B. Exit stack: B",
                "Building the exit stack: leaving A. Exit stack: A; B",
                "Building the exit stack: entering C. Exit stack: A; B",
                "Building the exit stack: leaving C. Exit stack: C; A; B",
                "second C",
                "second A",
                "second B",
            ]
        );
        assert!(seq.shared().stack.is_empty());
        assert_eq!(seq.depth(), 0);
    }
}
