//! Binary-heap priority queue with an ordered text snapshot.
//!
//! [`PriorityQueue`] is a min-heap keyed by a caller-supplied comparator. Unlike
//! [`std::collections::BinaryHeap`] it can enumerate its whole content in priority order,
//! which Dijkstra and A* render into their events after every queue change.
//!
//! Entries are never de-duplicated: the same element may be pushed several times with
//! different priorities, and callers resolve staleness when an entry is popped.
//!
//! # Example
//!
//! ```rust
//! use graphstep::utils::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push("b", 2.0);
//! queue.push("a", 1.0);
//! queue.push("c", 1.0);
//!
//! assert_eq!(queue.to_string(), "[(a, 1)]; (c, 1); (b, 2)");
//! assert_eq!(queue.pop(), Some(("a", 1.0)));
//! assert_eq!(queue.pop(), Some(("c", 1.0)));
//! ```

use std::{cmp::Ordering, fmt};

use crate::utils::join_text;

enum Comparator<P> {
    Natural,
    Custom(Box<dyn Fn(&P, &P) -> Ordering + Send + Sync>),
}

struct Entry<T, P> {
    item: T,
    priority: P,
    /// Insertion sequence, breaks ties first-in-first-out
    seq: u64,
}

/// A min-priority queue with a pluggable comparator.
///
/// Among entries whose priorities compare equal, the one pushed first is popped first, so the
/// pop order is fully deterministic.
pub struct PriorityQueue<T, P> {
    heap: Vec<Entry<T, P>>,
    next_seq: u64,
    compare: Comparator<P>,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty queue ordered by the natural ordering of `P`.
    ///
    /// Incomparable priorities (NaN) are treated as equal.
    #[must_use]
    pub fn new() -> Self {
        PriorityQueue {
            heap: Vec::new(),
            next_seq: 0,
            compare: Comparator::Natural,
        }
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty queue ordered by `compare`; the entry comparing least is popped first.
    ///
    /// # Arguments
    ///
    /// * `compare` - Total order over priorities
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&P, &P) -> Ordering + Send + Sync + 'static,
    {
        PriorityQueue {
            heap: Vec::new(),
            next_seq: 0,
            compare: Comparator::Custom(Box::new(compare)),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Inserts an element with the given priority.
    pub fn push(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            item,
            priority,
            seq,
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let entry = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|entry| (&entry.item, &entry.priority))
    }

    /// Returns every entry in the order it would be popped.
    #[must_use]
    pub fn iter_sorted(&self) -> Vec<(&T, &P)> {
        let mut entries: Vec<&Entry<T, P>> = self.heap.iter().collect();
        entries.sort_by(|a, b| self.order(a, b));
        entries
            .into_iter()
            .map(|entry| (&entry.item, &entry.priority))
            .collect()
    }

    /// Renders the queue as `"(element, priority)"` pairs in pop order, joined by `"; "`.
    ///
    /// The current minimum is wrapped in square brackets. An empty queue renders as an empty
    /// string.
    ///
    /// # Arguments
    ///
    /// * `element` - Formats one element
    /// * `priority` - Formats one priority
    pub fn render_with<FE, FP>(&self, element: FE, priority: FP) -> String
    where
        FE: Fn(&T) -> String,
        FP: Fn(&P) -> String,
    {
        join_text(
            self.iter_sorted()
                .into_iter()
                .enumerate()
                .map(|(i, (item, prio))| {
                    let pair = format!("({}, {})", element(item), priority(prio));
                    if i == 0 {
                        format!("[{pair}]")
                    } else {
                        pair
                    }
                }),
        )
    }

    fn order(&self, a: &Entry<T, P>, b: &Entry<T, P>) -> Ordering {
        let by_priority = match &self.compare {
            Comparator::Natural => a
                .priority
                .partial_cmp(&b.priority)
                .unwrap_or(Ordering::Equal),
            Comparator::Custom(compare) => compare(&a.priority, &b.priority),
        };
        by_priority.then(a.seq.cmp(&b.seq))
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.order(&self.heap[i], &self.heap[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: fmt::Display, P: PartialOrd + fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(ToString::to_string, ToString::to_string))
    }
}

impl<T: fmt::Debug, P: PartialOrd + fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_sorted()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order() {
        let mut queue = PriorityQueue::new();
        for (item, prio) in [("e", 5), ("b", 2), ("d", 4), ("a", 1), ("c", 3)] {
            queue.push(item, prio);
        }
        let order: Vec<&str> = std::iter::from_fn(|| queue.pop()).map(|(i, _)| i).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = PriorityQueue::new();
        queue.push(1, 0.0);
        queue.push(2, 0.0);
        queue.push(3, 0.0);
        queue.push(0, -1.0);
        let order: Vec<i32> = std::iter::from_fn(|| queue.pop()).map(|(i, _)| i).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_custom_comparator() {
        // (F, H): order by F, then smaller H
        let mut queue = PriorityQueue::with_comparator(|a: &(f64, f64), b: &(f64, f64)| {
            a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
        });
        queue.push("x", (3.0, 2.0));
        queue.push("y", (3.0, 1.0));
        queue.push("z", (4.0, 0.0));
        assert_eq!(queue.peek().map(|(i, _)| *i), Some("y"));
        assert_eq!(queue.pop().map(|(i, _)| i), Some("y"));
        assert_eq!(queue.pop().map(|(i, _)| i), Some("x"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut queue = PriorityQueue::new();
        queue.push("a", 3);
        queue.push("a", 1);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(("a", 1)));
        assert_eq!(queue.pop(), Some(("a", 3)));
    }

    #[test]
    fn test_render() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.to_string(), "");
        queue.push("b", 2);
        assert_eq!(queue.to_string(), "[(b, 2)]");
        queue.push("a", 1);
        assert_eq!(queue.to_string(), "[(a, 1)]; (b, 2)");
        let custom = queue.render_with(|s| s.to_uppercase(), |p| format!("{p}.0"));
        assert_eq!(custom, "[(A, 1.0)]; (B, 2.0)");
        assert_eq!(format!("{queue:?}"), r#"[("a", 1), ("b", 2)]"#);
    }

    #[test]
    fn test_iter_sorted_does_not_consume() {
        let mut queue = PriorityQueue::new();
        queue.push(10, 10);
        queue.push(5, 5);
        queue.push(7, 7);
        let sorted: Vec<i32> = queue.iter_sorted().into_iter().map(|(i, _)| *i).collect();
        assert_eq!(sorted, vec![5, 7, 10]);
        assert_eq!(queue.len(), 3);
    }
}
