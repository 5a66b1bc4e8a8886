// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphstep
//!
//! Interruptible, step-by-step implementations of classical graph algorithms.
//!
//! Every algorithm in this crate runs as a *suspendable process*: each meaningful step appends
//! one human-readable event to an append-only log and leaves algorithm-specific decorations
//! (colours, distances, discovery/low times, component ids) on a shared [`AnnotatedGraph`].
//! An external driver decides how far to advance: a single step, up to the next checkpoint,
//! or all the way to completion.
//!
//! # Architecture
//!
//! - [`graph`] - The annotated graph model: topology plus per-run decorations
//! - [`utils`] - Priority queue with textual snapshots, union-find, text helpers
//! - [`engine`] - The step sequencer contract, the recursion flattener and the run driver
//! - [`algorithms`] - The nine algorithms built on top of the above
//!
//! ## Suspension Model
//!
//! Each algorithm produces a lazy sequence of [`StopLevel`]s through the [`StepSequence`]
//! trait. [`StopLevel::Always`] marks a checkpoint that a fast-forwarding driver stops at,
//! [`StopLevel::Skippable`] marks a fine-grained step it may silently pass. Algorithms that are
//! naturally recursive (DFS, Tarjan, Kosaraju, reachability cover) are written as nested
//! [`engine::Routine`]s and executed by the [`engine::Flattener`], which keeps an explicit
//! stack instead of relying on native recursion.
//!
//! ## Supported Algorithms
//!
//! | Algorithm | Type | Arguments |
//! |-----------|------|-----------|
//! | Breadth-first traversal | [`algorithms::BreadthFirstSearch`] | start |
//! | Depth-first traversal | [`algorithms::DepthFirstSearch`] | start |
//! | Dijkstra | [`algorithms::Dijkstra`] | start |
//! | A* | [`algorithms::AStar`] | start, end, heuristic |
//! | Bellman-Ford | [`algorithms::BellmanFord`] | start |
//! | Reachability cover | [`algorithms::DominatorSet`] | - |
//! | Kosaraju SCC | [`algorithms::Kosaraju`] | - |
//! | Kruskal MST | [`algorithms::Kruskal`] | - |
//! | Tarjan bridges | [`algorithms::TarjanBridges`] | - |
//!
//! # Quick Start
//!
//! ```rust
//! use graphstep::prelude::*;
//!
//! let mut graph = AnnotatedGraph::new();
//! let a = graph.add_node("A")?;
//! let b = graph.add_node("B")?;
//! let c = graph.add_node("C")?;
//! graph.add_edge(a, b, Some(2.0), false)?;
//! graph.add_edge(b, c, Some(3.0), false)?;
//! graph.add_edge(a, c, Some(10.0), false)?;
//!
//! let mut dijkstra = Dijkstra::new();
//! dijkstra.set_argument(Dijkstra::START, ArgumentValue::Node(a))?;
//!
//! let mut run = Run::start(&mut graph, &dijkstra)?;
//! while run.skip_to_checkpoint().is_some() {
//!     println!("{}", run.current_event());
//! }
//! drop(run);
//!
//! assert_eq!(graph[c].decoration.distance_from_start, Some(5.0));
//! # Ok::<(), graphstep::Error>(())
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself. Heuristic
//! failures are reported at `error` level, run lifecycle at `debug`, routine stack movement at
//! `trace`.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphstep::prelude::*;
///
/// let mut graph = AnnotatedGraph::new();
/// let start = graph.add_node("S")?;
/// let mut bfs = BreadthFirstSearch::new();
/// bfs.set_argument(BreadthFirstSearch::START, ArgumentValue::Node(start))?;
/// let mut run = Run::start(&mut graph, &bfs)?;
/// run.run_to_completion();
/// assert!(run.is_finished());
/// # Ok::<(), graphstep::Error>(())
/// ```
pub mod prelude;

/// The annotated graph model shared by every algorithm.
///
/// Topology (nodes, edges, adjacency, positions) is supplied by the caller before a run;
/// decorations ([`graph::NodeDecoration`], [`graph::EdgeDecoration`]) are transient, run-scoped
/// state that the algorithms mutate and the renderer reads.
pub mod graph;

/// Supporting data structures: the introspectable priority queue and union-find.
pub mod utils;

/// The step sequencer contract, arguments, the recursion flattener and the run driver.
pub mod engine;

/// The nine step-wise algorithms, the heuristic registry and the algorithm catalogue.
pub mod algorithms;

/// `graphstep` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphstep` Error type
///
/// The main error type for all fallible operations of this crate: topology ingestion,
/// argument assignment and run creation.
pub use error::Error;

pub use algorithms::{AlgorithmKind, HeuristicRegistry};
pub use engine::{Algorithm, ArgumentValue, EventLog, Run, StepSequence, StopLevel};
pub use graph::{AnnotatedGraph, Color, EdgeColor, EdgeId, NodeId};
