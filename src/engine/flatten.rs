//! Recursion flattening for step-wise algorithms.
//!
//! Depth-first algorithms are naturally recursive, but a [`StepSequence`] must be advanced one
//! suspension point at a time from the outside. A [`Flattener`] bridges the two: each level of
//! the recursion is a [`Routine`] (an explicit state machine), and the flattener keeps the
//! in-progress routines on an explicit stack, innermost last.
//!
//! On every [`advance`](StepSequence::advance) the top routine is resumed:
//!
//! - it finishes ([`None`]): the routine is popped (the recursive call returned) and the new
//!   top is resumed
//! - it pauses ([`Yield::Pause`]): the level is passed outward as the result of this advance
//! - it calls ([`Yield::Call`]): the child routine is pushed and resumed immediately, without
//!   producing an event of its own
//!
//! This reproduces the interleaving of a native call stack while the depth is bounded only by
//! heap memory.
//!
//! Routines of one algorithm share a value of type `S` (a timer, an exit stack, a component
//! counter) owned by the flattener and lent to whichever routine is running.

use crate::engine::{StepContext, StepSequence, StopLevel};

/// What a resumed routine asks of the flattener.
pub enum Yield<S> {
    /// Suspend the whole sequence at this level
    Pause(StopLevel),
    /// Run this child routine to completion before resuming the caller
    Call(Box<dyn Routine<S>>),
}

/// One level of a flattened recursion.
pub trait Routine<S> {
    /// Runs until the next pause or call. Returns `None` when the routine has finished.
    fn resume(&mut self, cx: &mut StepContext<'_>, shared: &mut S) -> Option<Yield<S>>;
}

/// Drives a tree of nested [`Routine`]s as one flat [`StepSequence`].
///
/// # Examples
///
/// ```rust
/// use graphstep::engine::{
///     EventLog, Flattener, Routine, StepContext, StepSequence, StopLevel, Yield,
/// };
/// use graphstep::AnnotatedGraph;
///
/// // Counts down, announcing each level before descending into the next one.
/// struct Countdown(u32, bool);
///
/// impl Routine<()> for Countdown {
///     fn resume(&mut self, cx: &mut StepContext<'_>, _: &mut ()) -> Option<Yield<()>> {
///         if self.1 {
///             return None;
///         }
///         self.1 = true;
///         cx.events.push(format!("level {}", self.0));
///         if self.0 == 0 {
///             return Some(Yield::Pause(StopLevel::Always));
///         }
///         Some(Yield::Call(Box::new(Countdown(self.0 - 1, false))))
///     }
/// }
///
/// let mut graph = AnnotatedGraph::new();
/// let mut events = EventLog::new();
/// let mut cx = StepContext::new(&mut graph, &mut events);
/// let mut seq = Flattener::new((), Box::new(Countdown(2, false)));
///
/// assert_eq!(seq.advance(&mut cx), Some(StopLevel::Always));
/// assert_eq!(seq.depth(), 3);
/// assert_eq!(seq.advance(&mut cx), None);
/// assert_eq!(events.entries()[1..], ["level 2", "level 1", "level 0"]);
/// ```
pub struct Flattener<S> {
    shared: S,
    stack: Vec<Box<dyn Routine<S>>>,
}

impl<S> Flattener<S> {
    /// Creates a flattener whose stack holds only `root`.
    pub fn new(shared: S, root: Box<dyn Routine<S>>) -> Self {
        Flattener {
            shared,
            stack: vec![root],
        }
    }

    /// Returns the number of routines currently in progress.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the state shared by all routines.
    #[must_use]
    pub fn shared(&self) -> &S {
        &self.shared
    }
}

impl<S> StepSequence for Flattener<S> {
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel> {
        loop {
            let top = self.stack.last_mut()?;
            match top.resume(cx, &mut self.shared) {
                None => {
                    self.stack.pop();
                    log::trace!("routine returned, depth {}", self.stack.len());
                }
                Some(Yield::Pause(level)) => return Some(level),
                Some(Yield::Call(child)) => {
                    self.stack.push(child);
                    log::trace!("routine called, depth {}", self.stack.len());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::EventLog, graph::AnnotatedGraph};

    /// Emits `pre`, recurses into each child, emits `post`.
    struct Tree {
        name: &'static str,
        children: Vec<Tree>,
        state: usize,
    }

    impl Tree {
        fn new(name: &'static str, children: Vec<Tree>) -> Self {
            Tree {
                name,
                children,
                state: 0,
            }
        }
    }

    impl Routine<u32> for Tree {
        fn resume(&mut self, cx: &mut StepContext<'_>, calls: &mut u32) -> Option<Yield<u32>> {
            if self.state == 0 {
                self.state = 1;
                *calls += 1;
                cx.events.push(format!("pre {}", self.name));
                return Some(Yield::Pause(StopLevel::Skippable));
            }
            if !self.children.is_empty() {
                let child = self.children.remove(0);
                return Some(Yield::Call(Box::new(child)));
            }
            if self.state == 1 {
                self.state = 2;
                cx.events.push(format!("post {}", self.name));
                return Some(Yield::Pause(StopLevel::Always));
            }
            None
        }
    }

    fn native(tree: &Tree, out: &mut Vec<String>) {
        out.push(format!("pre {}", tree.name));
        for child in &tree.children {
            native(child, out);
        }
        out.push(format!("post {}", tree.name));
    }

    fn sample() -> Tree {
        Tree::new(
            "a",
            vec![
                Tree::new("b", vec![Tree::new("d", vec![])]),
                Tree::new("c", vec![]),
            ],
        )
    }

    #[test]
    fn test_matches_native_recursion_order() {
        let mut expected = Vec::new();
        native(&sample(), &mut expected);

        let mut graph = AnnotatedGraph::new();
        let mut events = EventLog::new();
        let mut seq = Flattener::new(0u32, Box::new(sample()));
        let mut levels = Vec::new();
        {
            let mut cx = StepContext::new(&mut graph, &mut events);
            while let Some(level) = seq.advance(&mut cx) {
                levels.push(level);
            }
        }

        assert_eq!(events.entries()[1..], expected[..]);
        assert_eq!(levels.len(), expected.len());
        assert_eq!(*seq.shared(), 4);
        assert_eq!(seq.depth(), 0);
    }

    #[test]
    fn test_one_event_per_advance() {
        let mut graph = AnnotatedGraph::new();
        let mut events = EventLog::new();
        let mut seq = Flattener::new(0u32, Box::new(sample()));
        let mut cx = StepContext::new(&mut graph, &mut events);
        let mut advances = 0;
        while seq.advance(&mut cx).is_some() {
            advances += 1;
            assert_eq!(cx.events.len(), advances + 1);
        }
    }

    #[test]
    fn test_deep_recursion_does_not_use_native_stack() {
        let mut root = Tree::new("leaf", vec![]);
        for _ in 0..50_000 {
            root = Tree::new("n", vec![root]);
        }
        let mut graph = AnnotatedGraph::new();
        let mut events = EventLog::new();
        let mut seq = Flattener::new(0u32, Box::new(root));
        let mut cx = StepContext::new(&mut graph, &mut events);
        let mut max_depth = 0;
        while seq.advance(&mut cx).is_some() {
            max_depth = max_depth.max(seq.depth());
        }
        assert_eq!(max_depth, 50_001);
    }
}
