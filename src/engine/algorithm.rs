//! The interface every step-wise algorithm implements.

use crate::{
    engine::{argument::node_argument, Argument, ArgumentValue, StepSequence},
    graph::{AnnotatedGraph, NodeId},
    Error, Result,
};

/// A configurable algorithm that produces a [`StepSequence`] over a graph.
///
/// An algorithm owns its arguments; [`execute`](Self::execute) snapshots them into a new,
/// independent sequence, so the algorithm can be reconfigured while a run is in progress
/// without affecting it.
pub trait Algorithm {
    /// Short display name, e.g. `"BFS"`.
    fn name(&self) -> &'static str;

    /// Full display name, e.g. `"Breadth-first search"`.
    fn full_name(&self) -> &'static str;

    /// One-sentence description of what the algorithm computes.
    fn short_description(&self) -> &'static str;

    /// Returns the argument slots in declaration order.
    fn arguments(&self) -> &[Argument];

    /// Returns the argument slots mutably.
    fn arguments_mut(&mut self) -> &mut [Argument];

    /// Assigns a value to the argument called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] if there is no such argument and
    /// [`Error::ArgumentKindMismatch`] if the value has the wrong kind.
    fn set_argument(&mut self, name: &str, value: ArgumentValue) -> Result<()> {
        let arg = self
            .arguments_mut()
            .iter_mut()
            .find(|arg| arg.name() == name)
            .ok_or_else(|| Error::UnknownArgument(name.to_string()))?;
        arg.set(value)
    }

    /// Clears every argument back to its default.
    fn reset_arguments(&mut self) {
        for arg in self.arguments_mut() {
            arg.reset();
        }
    }

    /// Returns `true` if the arguments allow a run on `graph`.
    fn validate_arguments(&self, graph: &AnnotatedGraph) -> bool;

    /// Creates a fresh sequence for one run over `graph`.
    ///
    /// The graph's decorations must already be reset; the sequence only starts writing them on
    /// its first advance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if the arguments do not validate.
    fn execute(&self, graph: &AnnotatedGraph) -> Result<Box<dyn StepSequence>>;
}

/// Returns the node assigned to the argument `name`, provided it belongs to `graph`.
pub(crate) fn required_node(
    arguments: &[Argument],
    name: &str,
    graph: &AnnotatedGraph,
    algorithm: &str,
) -> Result<NodeId> {
    node_argument(arguments, name)
        .filter(|&node| graph.contains_node(node))
        .ok_or_else(|| Error::InvalidArguments(algorithm.to_string()))
}
