//! The step-wise algorithms.
//!
//! Every algorithm implements [`Algorithm`]: it owns its typed arguments and produces a fresh
//! [`StepSequence`](crate::engine::StepSequence) per run. Iterative algorithms are explicit
//! state machines; the recursive ones (DFS, Tarjan, Kosaraju, reachability cover) are written as
//! [`Routine`](crate::engine::Routine)s and driven by the [`Flattener`](crate::engine::Flattener).
//!
//! # Catalogue
//!
//! [`AlgorithmKind`] lists the algorithms in menu order. [`AlgorithmKind::create`] and
//! [`catalog`] build them as boxed trait objects, so a front end can offer them without naming
//! the concrete types:
//!
//! ```rust
//! use graphstep::{algorithms::catalog, AlgorithmKind, HeuristicRegistry};
//! use strum::EnumCount;
//!
//! let registry = HeuristicRegistry::with_presets();
//! let algorithms = catalog(&registry);
//! assert_eq!(algorithms.len(), AlgorithmKind::COUNT);
//! assert_eq!(algorithms[3].name(), "A*");
//!
//! let kind: AlgorithmKind = "Bellman-Ford".parse().unwrap();
//! assert_eq!(kind.create(&registry).arguments().len(), 1);
//! ```

mod astar;
mod bellman_ford;
mod bfs;
mod dfs;
mod dijkstra;
mod dominator_set;
mod exit_order;
mod heuristics;
mod kosaraju;
mod kruskal;
mod tarjan;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::engine::Algorithm;

pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::Dijkstra;
pub use dominator_set::DominatorSet;
pub use heuristics::{euclidean, manhattan, Heuristic, HeuristicRegistry};
pub use kosaraju::Kosaraju;
pub use kruskal::Kruskal;
pub use tarjan::TarjanBridges;

/// The available algorithms, in menu order.
///
/// The string form of every variant equals the [`Algorithm::name`] of the algorithm it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, EnumCount)]
pub enum AlgorithmKind {
    /// [`BreadthFirstSearch`]
    #[strum(serialize = "BFS")]
    BreadthFirstSearch,
    /// [`DepthFirstSearch`]
    #[strum(serialize = "DFS")]
    DepthFirstSearch,
    /// [`Dijkstra`]
    #[strum(serialize = "Dijkstra")]
    Dijkstra,
    /// [`AStar`]
    #[strum(serialize = "A*")]
    AStar,
    /// [`BellmanFord`]
    #[strum(serialize = "Bellman-Ford")]
    BellmanFord,
    /// [`DominatorSet`]
    #[strum(serialize = "Dominator set")]
    DominatorSet,
    /// [`Kosaraju`]
    #[strum(serialize = "Kosaraju")]
    Kosaraju,
    /// [`Kruskal`]
    #[strum(serialize = "Kruskal")]
    Kruskal,
    /// [`TarjanBridges`]
    #[strum(serialize = "Tarjan")]
    TarjanBridges,
}

impl AlgorithmKind {
    /// Creates the algorithm with its arguments unset. Only A* uses `registry`.
    #[must_use]
    pub fn create(self, registry: &HeuristicRegistry) -> Box<dyn Algorithm> {
        match self {
            AlgorithmKind::BreadthFirstSearch => Box::new(BreadthFirstSearch::new()),
            AlgorithmKind::DepthFirstSearch => Box::new(DepthFirstSearch::new()),
            AlgorithmKind::Dijkstra => Box::new(Dijkstra::new()),
            AlgorithmKind::AStar => Box::new(AStar::new(registry.clone())),
            AlgorithmKind::BellmanFord => Box::new(BellmanFord::new()),
            AlgorithmKind::DominatorSet => Box::new(DominatorSet::new()),
            AlgorithmKind::Kosaraju => Box::new(Kosaraju::new()),
            AlgorithmKind::Kruskal => Box::new(Kruskal::new()),
            AlgorithmKind::TarjanBridges => Box::new(TarjanBridges::new()),
        }
    }
}

/// Creates one instance of every algorithm, in menu order.
#[must_use]
pub fn catalog(registry: &HeuristicRegistry) -> Vec<Box<dyn Algorithm>> {
    AlgorithmKind::iter()
        .map(|kind| kind.create(registry))
        .collect()
}
