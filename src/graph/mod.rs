//! Annotated graph model.
//!
//! This module holds the graph every algorithm operates on: a weighted, optionally
//! bidirectional graph whose nodes and edges carry per-run decorations (colours, distances,
//! predecessor links and bookkeeping values).
//!
//! # Architecture
//!
//! - **Identifiers**: [`NodeId`] and [`EdgeId`] are strongly-typed indices, assigned in insertion
//!   order
//! - **Storage**: [`AnnotatedGraph`] owns the node and edge tables plus forward and backward
//!   adjacency
//! - **Decorations**: [`NodeDecoration`] and [`EdgeDecoration`] hold everything an algorithm
//!   writes; [`AnnotatedGraph::reset_decorations`] restores their initial state
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] let the [`traversal`] helper
//!   and Kosaraju's second pass run on the graph and on the [`Transposed`] view alike
//!
//! # Topology vs. Decoration
//!
//! Topology (labels, positions, edges, weights) is only changed through the graph's own
//! mutators. Algorithms never add or remove nodes or edges; they only write decorations,
//! which is why a run borrows the graph mutably but never changes its shape.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphstep::graph::{AnnotatedGraph, Successors};
//!
//! let mut graph = AnnotatedGraph::new();
//! let a = graph.add_node("A")?;
//! let b = graph.add_node("B")?;
//! let c = graph.add_node("C")?;
//! graph.add_edge(a, b, None, false)?;
//! graph.add_edge(a, c, None, true)?;
//!
//! let next: Vec<_> = graph.successors(a).collect();
//! assert_eq!(next, vec![b, c]);
//! assert_eq!(graph.successors(c).collect::<Vec<_>>(), vec![a]);
//! # Ok::<(), graphstep::Error>(())
//! ```

mod annotated;
mod decoration;
mod edge;
mod node;
mod traits;
pub mod traversal;

pub use annotated::{AnnotatedGraph, NodeInfo};
pub use decoration::{Color, EdgeColor, EdgeDecoration, NodeDecoration};
pub use edge::{Edge, EdgeId};
pub use node::{Adjacent, Node, NodeId, Position};
pub use traits::{GraphBase, Predecessors, Successors, Transposed};
