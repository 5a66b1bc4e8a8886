//! Tarjan's bridges and articulation points.

use crate::{
    engine::{Algorithm, Argument, Flattener, Routine, StepContext, StepSequence, StopLevel, Yield},
    graph::{Adjacent, AnnotatedGraph, Color, EdgeColor, NodeId},
    Result,
};

/// Tarjan's bridge-finding algorithm, extended to articulation points.
///
/// A depth-first traversal (restarted from every node still unvisited) assigns each node a
/// discovery time `T` and a low-link `L`. A tree edge towards `child` is a bridge when
/// `L(child) > T(node)` and is coloured `Accent`. A non-root node is an articulation point when
/// some child has `L(child) >= T(node)`; a root is one when it has more than one tree child.
/// Articulation points end up `AltA`, every other node `Done`.
///
/// Back edges are coloured `Selected`. The graph is meant to be undirected, i.e. built from
/// bidirectional edges.
#[derive(Debug, Clone, Default)]
pub struct TarjanBridges {
    arguments: [Argument; 0],
}

impl TarjanBridges {
    /// Creates the algorithm. It takes no arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for TarjanBridges {
    fn name(&self) -> &'static str {
        "Tarjan"
    }

    fn full_name(&self) -> &'static str {
        "Tarjan's bridge-finding algorithm"
    }

    fn short_description(&self) -> &'static str {
        "Bridges and articulation points of an undirected graph"
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
        Ok(Box::new(Flattener::new(0u32, Box::new(Forest { next: 0 }))))
    }
}

/// Starts a traversal from every node that is still unvisited.
struct Forest {
    next: usize,
}

impl Routine<u32> for Forest {
    fn resume(&mut self, cx: &mut StepContext<'_>, _: &mut u32) -> Option<Yield<u32>> {
        while self.next < cx.graph.node_count() {
            let node = NodeId::new(self.next);
            self.next += 1;
            if cx.graph[node].decoration.color == Color::Unvisited {
                return Some(Yield::Call(Box::new(Bridges::new(node, None))));
            }
        }
        None
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Enter,
    Scan(usize),
    Descend(usize, Adjacent),
    Returned(usize, Adjacent),
    Bridge(usize, Adjacent),
    Articulation(usize, Adjacent),
    Exit,
    Final,
    Finished,
}

/// One recursive visit; the shared value is the discovery clock.
struct Bridges {
    node: NodeId,
    parent: Option<NodeId>,
    children: usize,
    phase: Phase,
}

impl Bridges {
    fn new(node: NodeId, parent: Option<NodeId>) -> Self {
        Bridges {
            node,
            parent,
            children: 0,
            phase: Phase::Enter,
        }
    }
}

fn discovery(graph: &AnnotatedGraph, node: NodeId) -> u32 {
    graph[node].decoration.discovery_time.unwrap_or(u32::MAX)
}

fn low(graph: &AnnotatedGraph, node: NodeId) -> u32 {
    graph[node].decoration.low_link.unwrap_or(u32::MAX)
}

impl Routine<u32> for Bridges {
    fn resume(&mut self, cx: &mut StepContext<'_>, time: &mut u32) -> Option<Yield<u32>> {
        let node = self.node;
        let name = cx.name(node);
        loop {
            match self.phase {
                Phase::Enter => {
                    *time += 1;
                    let decoration = &mut cx.graph[node].decoration;
                    decoration.color = Color::Active;
                    decoration.discovery_time = Some(*time);
                    decoration.low_link = Some(*time);
                    self.phase = Phase::Scan(0);
                    let text = format!("Entering {name} (T=L={time}), checking its edges");
                    return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                }
                Phase::Scan(index) => {
                    let Some(&adj) = cx.graph.adjacent(node).get(index) else {
                        self.phase = Phase::Exit;
                        continue;
                    };
                    if Some(adj.node) == self.parent {
                        self.phase = Phase::Scan(index + 1);
                        continue;
                    }

                    let other = cx.name(adj.node);
                    if cx.graph[adj.node].decoration.color != Color::Unvisited {
                        cx.graph[adj.edge].decoration.color = EdgeColor::Selected;
                        let before = low(cx.graph, node);
                        let reached = discovery(cx.graph, adj.node);
                        let after = before.min(reached);
                        cx.graph[node].decoration.low_link = Some(after);
                        self.phase = Phase::Scan(index + 1);
                        let text = format!(
                            "{name} -> {other} is a back edge, L({name}) becomes the minimum of \
                             L({name})={before} and T({other})={reached} ({after})"
                        );
                        return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                    }

                    self.children += 1;
                    cx.graph[adj.edge].decoration.color = EdgeColor::Pending;
                    self.phase = Phase::Descend(index, adj);
                    let text = format!("{name} -> {other} is a tree edge, entering {other}");
                    return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                }
                Phase::Descend(index, adj) => {
                    cx.graph[adj.edge].decoration.color = EdgeColor::Plain;
                    self.phase = Phase::Returned(index, adj);
                    return Some(Yield::Call(Box::new(Bridges::new(adj.node, Some(node)))));
                }
                Phase::Returned(index, adj) => {
                    let other = cx.name(adj.node);
                    let before = low(cx.graph, node);
                    let child = low(cx.graph, adj.node);
                    let after = before.min(child);
                    cx.graph[node].decoration.low_link = Some(after);
                    self.phase = Phase::Bridge(index, adj);
                    let text = format!(
                        "Left {other}, back in {name}. L({name}) becomes the minimum of \
                         L({name})={before} and L({other})={child} ({after})"
                    );
                    return cx.emit(StopLevel::Skippable, text).map(Yield::Pause);
                }
                Phase::Bridge(index, adj) => {
                    self.phase = Phase::Articulation(index, adj);
                    let (t, l) = (discovery(cx.graph, node), low(cx.graph, adj.node));
                    if l > t {
                        cx.graph[adj.edge].decoration.color = EdgeColor::Accent;
                        let text = format!(
                            "T({name})={t} is smaller than L({})={l}, so the edge between them \
                             is a bridge",
                            cx.graph.label(adj.node)
                        );
                        return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                    }
                }
                Phase::Articulation(index, adj) => {
                    self.phase = Phase::Scan(index + 1);
                    let (t, l) = (discovery(cx.graph, node), low(cx.graph, adj.node));
                    if self.parent.is_some() && l >= t {
                        cx.graph[node].decoration.color = Color::AltA;
                        let text = format!(
                            "T({name})={t} is not greater than L({})={l} and {name} is not the \
                             root of the traversal tree, so {name} is an articulation point",
                            cx.graph.label(adj.node)
                        );
                        return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                    }
                }
                Phase::Exit => {
                    cx.graph[node].decoration.show_low = true;
                    self.phase = Phase::Final;
                    if self.parent.is_none() && self.children > 1 {
                        cx.graph[node].decoration.color = Color::AltA;
                        let text = format!(
                            "{name} is the root of the traversal tree and has more than one \
                             direct child, so it is an articulation point"
                        );
                        return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                    }
                }
                Phase::Final => {
                    let decoration = &mut cx.graph[node].decoration;
                    if decoration.color != Color::AltA {
                        decoration.color = Color::Done;
                    }
                    let l = low(cx.graph, node);
                    self.phase = Phase::Finished;
                    let text = format!("Final L value of {name} is {l}, leaving it");
                    return cx.emit(StopLevel::Always, text).map(Yield::Pause);
                }
                Phase::Finished => return None,
            }
        }
    }
}
