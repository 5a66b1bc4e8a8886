//! The suspend/resume contract shared by every algorithm.

use std::fmt;

use strum::Display;

use crate::graph::AnnotatedGraph;

/// Classification of a suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StopLevel {
    /// Initial marker of a fresh run; never produced by a sequence
    Start,
    /// Checkpoint: a driver stops here even when fast-forwarding
    Always,
    /// Fine-grained step a driver may pass through when skipping to the next checkpoint
    Skippable,
}

/// Append-only log of human-readable events.
///
/// The last entry is the current event. A reset log holds the single entry `"START"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    /// Text of the first entry of every run.
    pub const START: &'static str = "START";
    /// Text appended once a run is exhausted.
    pub const END: &'static str = "END";

    /// Creates a log holding only the start marker.
    #[must_use]
    pub fn new() -> Self {
        EventLog {
            entries: vec![Self::START.to_string()],
        }
    }

    /// Drops every entry and re-adds the start marker.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Self::START.to_string());
    }

    /// Appends an event.
    pub fn push(&mut self, event: impl Into<String>) {
        self.entries.push(event.into());
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.last().map_or(Self::START, String::as_str)
    }

    /// Returns every event in the order it was appended.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of events, including the start marker.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log holds nothing but the start marker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Everything a sequence may touch while advancing: the decorated graph and the event log.
pub struct StepContext<'a> {
    /// Graph whose decorations the algorithm writes
    pub graph: &'a mut AnnotatedGraph,
    /// Log receiving one event per suspension
    pub events: &'a mut EventLog,
}

impl<'a> StepContext<'a> {
    /// Bundles a graph and an event log.
    pub fn new(graph: &'a mut AnnotatedGraph, events: &'a mut EventLog) -> Self {
        StepContext { graph, events }
    }

    /// Appends an event and returns `Some(level)`, ready to be returned from
    /// [`StepSequence::advance`].
    pub fn emit(&mut self, level: StopLevel, event: impl Into<String>) -> Option<StopLevel> {
        self.events.push(event);
        Some(level)
    }

    /// Returns the label of `node`, owned so it can be used while the graph is mutated.
    pub(crate) fn name(&self, node: crate::graph::NodeId) -> String {
        self.graph.label(node).to_string()
    }
}

/// A lazily produced, finite sequence of suspension points.
///
/// Each call to [`advance`](Self::advance) runs the algorithm up to its next suspension point,
/// appends exactly one event to the log, and returns the point's [`StopLevel`]. `None` means
/// the algorithm has finished; nothing is appended in that case.
pub trait StepSequence {
    /// Runs to the next suspension point.
    fn advance(&mut self, cx: &mut StepContext<'_>) -> Option<StopLevel>;
}
