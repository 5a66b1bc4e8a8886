//! Support data structures shared by the algorithms.
//!
//! - [`PriorityQueue`] - Binary min-heap with a pluggable comparator and an ordered text
//!   snapshot (Dijkstra, A*)
//! - [`DisjointSet`] / [`UnionFind`] - Path-compressing, rank-balanced union-find (Kruskal)
//! - [`join_text`], [`format_number`], [`format_distance`] - Event payload formatting

mod priority_queue;
mod text;
mod union_find;

pub use priority_queue::PriorityQueue;
pub use text::{format_distance, format_number, join_text};
pub use union_find::{DisjointSet, UnionFind};
