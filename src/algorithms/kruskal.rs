//! Kruskal's minimum spanning forest.

use crate::{
    engine::{Algorithm, Argument, StepContext, StepSequence, StopLevel},
    graph::{AnnotatedGraph, EdgeColor, EdgeId},
    utils::{format_number, DisjointSet},
    Result,
};

/// Kruskal's algorithm.
///
/// Edges are taken in ascending weight order (stable, so equal weights keep insertion order)
/// and direction is ignored. An edge whose endpoints lie in different trees is kept
/// (`Selected`) and the trees are merged; any other edge is discarded (`Plain`). The union-find
/// forest lives in the node decorations, so the current trees can be rendered after every step.
#[derive(Debug, Clone, Default)]
pub struct Kruskal {
    arguments: [Argument; 0],
}

impl Kruskal {
    /// Creates the algorithm. It takes no arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for Kruskal {
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn full_name(&self) -> &'static str {
        "Kruskal's algorithm"
    }

    fn short_description(&self) -> &'static str {
        "Minimum-weight spanning forest"
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

    fn execute(&self, graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>> {
        let mut order: Vec<EdgeId> = graph.edge_ids().collect();
        order.sort_by(|&a, &b| graph[a].weight().total_cmp(&graph[b].weight()));
        Ok(Box::new(KruskalSequence {
            order,
            next: 0,
            checking: false,
        }))
    }
}

struct KruskalSequence {
    order: Vec<EdgeId>,
    next: usize,
    /// The edge at `next` has been announced and waits for its verdict
    checking: bool,
}

impl StepSequence for KruskalSequence {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        let edge = *self.order.get(self.next)?;
        let (a, b) = cx.graph[edge].endpoints();
        let (name_a, name_b) = (cx.name(a), cx.name(b));

        if !self.checking {
            self.checking = true;
            cx.graph[edge].decoration.color = EdgeColor::Accent;
            let text = format!(
                "Checking the edge between {name_a} and {name_b} (weight: {}).",
                format_number(cx.graph[edge].weight())
            );
            return cx.emit(StopLevel::Skippable, text);
        }

        self.checking = false;
        self.next += 1;
        let root_a = cx.graph.find(a);
        let root_b = cx.graph.find(b);
        let text = if root_a != root_b {
            cx.graph[edge].decoration.color = EdgeColor::Selected;
            cx.graph.union(root_a, root_b);
            format!(
                "{name_a} (root: {}) and {name_b} (root: {}) belong to different trees, the edge \
                 is kept.",
                cx.graph.label(root_a),
                cx.graph.label(root_b)
            )
        } else {
            cx.graph[edge].decoration.color = EdgeColor::Plain;
            format!(
                "{name_a} and {name_b} belong to the same tree (root: {}), the edge is discarded.",
                cx.graph.label(root_a)
            )
        };
        cx.emit(StopLevel::Always, text)
    }
}
