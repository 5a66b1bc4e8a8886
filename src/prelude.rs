//! # graphstep Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits of
//! the graphstep library. Import it to build a graph, configure an algorithm and drive a run
//! without spelling out module paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphstep operations
pub use crate::Error;

/// The result type used throughout graphstep
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// The decorated graph every algorithm reads and mutates
pub use crate::graph::{AnnotatedGraph, NodeInfo};

/// Node and edge identifiers and records
pub use crate::graph::{Adjacent, Edge, EdgeId, Node, NodeId, Position};

/// Per-run decorations
pub use crate::graph::{Color, EdgeColor, EdgeDecoration, NodeDecoration};

/// Graph abstractions used by the traversal helpers
pub use crate::graph::{GraphBase, Predecessors, Successors, Transposed};

// ================================================================================================
// Step Engine
// ================================================================================================

/// The algorithm interface and its arguments
pub use crate::engine::{Algorithm, Argument, ArgumentKind, ArgumentValue};

/// The run driver and the event log it fills
pub use crate::engine::{EventLog, Run, StopLevel};

/// Building blocks for custom step-wise algorithms
pub use crate::engine::{Flattener, Routine, StepContext, StepSequence, Yield};

// ================================================================================================
// Algorithms
// ================================================================================================

/// The nine algorithms
pub use crate::algorithms::{
    AStar, BellmanFord, BreadthFirstSearch, DepthFirstSearch, Dijkstra, DominatorSet, Kosaraju,
    Kruskal, TarjanBridges,
};

/// Algorithm catalogue and A* configuration
pub use crate::algorithms::{catalog, AlgorithmKind, Heuristic, HeuristicRegistry};

// ================================================================================================
// Utilities
// ================================================================================================

/// Supporting data structures
pub use crate::utils::{DisjointSet, PriorityQueue, UnionFind};
