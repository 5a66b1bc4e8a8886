use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

macro_rules! graph_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::GraphError($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::GraphError(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Nothing inside a running algorithm is fatal: the variants below are raised while the graph
/// topology is being ingested, while arguments are being assigned, or when a run is requested
/// for an algorithm whose arguments do not validate. Once a run has started, internal
/// inconsistencies are logged and degraded instead of being surfaced as errors.
///
/// # Error Categories
///
/// ## Topology Errors
/// - [`Error::InvalidLabel`] - Empty or whitespace-only node label
/// - [`Error::DuplicateNode`] - A node with the same label already exists
/// - [`Error::UnknownNode`] / [`Error::UnknownEdge`] - Identifier does not belong to the graph
/// - [`Error::SelfLoop`] - Edge from a node to itself
/// - [`Error::DuplicateEdge`] - Second edge between the same pair of nodes (either direction)
/// - [`Error::InvalidWeight`] - NaN or infinite edge weight
///
/// ## Argument Errors
/// - [`Error::UnknownArgument`] - The algorithm has no argument of that name
/// - [`Error::ArgumentKindMismatch`] - Value of the wrong kind for the argument
/// - [`Error::InvalidArguments`] - A run was requested but the arguments do not validate
/// - [`Error::UnknownHeuristic`] - Heuristic name is not registered
///
/// ## Evaluation Errors
/// - [`Error::Heuristic`] - A heuristic callable failed (caught and degraded by A*)
/// - [`Error::GraphError`] - Generic graph inconsistency
///
/// # Examples
///
/// ```rust
/// use graphstep::{AnnotatedGraph, Error};
///
/// let mut graph = AnnotatedGraph::new();
/// let a = graph.add_node("A")?;
///
/// match graph.add_edge(a, a, None, false) {
///     Err(Error::SelfLoop(label)) => assert_eq!(label, "A"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Topology errors
    /// A node label was empty or consisted only of whitespace.
    #[error("Node labels must not be empty")]
    InvalidLabel,

    /// A node with the given label is already part of the graph.
    #[error("A node labelled '{0}' already exists")]
    DuplicateNode(String),

    /// The node identifier does not refer to a node of this graph.
    #[error("Unknown node - {0}")]
    UnknownNode(NodeId),

    /// The edge identifier does not refer to an edge of this graph.
    #[error("Unknown edge - {0}")]
    UnknownEdge(EdgeId),

    /// An edge was requested from a node to itself.
    #[error("Self-loops are not supported ('{0}')")]
    SelfLoop(String),

    /// An edge between the two nodes already exists, in either direction.
    ///
    /// # Fields
    ///
    /// * `source` - Label of the requested source node
    /// * `target` - Label of the requested target node
    #[error("An edge between '{source}' and '{target}' already exists")]
    DuplicateEdge {
        /// Label of the requested source node
        r#source: String,
        /// Label of the requested target node
        target: String,
    },

    /// The edge weight was NaN or infinite.
    #[error("Edge weight must be finite, got {0}")]
    InvalidWeight(f64),

    // Argument errors
    /// The algorithm does not declare an argument with this name.
    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),

    /// The value supplied for an argument has the wrong kind.
    ///
    /// # Fields
    ///
    /// * `name` - Name of the argument
    /// * `expected` - Kind the argument accepts
    #[error("Argument '{name}' expects a {expected} value")]
    ArgumentKindMismatch {
        /// Name of the argument
        name: String,
        /// Kind the argument accepts
        expected: String,
    },

    /// A run was requested for an algorithm whose arguments do not validate.
    #[error("Arguments of '{0}' are missing or invalid")]
    InvalidArguments(String),

    /// No heuristic is registered under the requested name.
    #[error("No heuristic named '{0}' is registered")]
    UnknownHeuristic(String),

    // Evaluation errors
    /// A heuristic callable failed while being evaluated.
    #[error("Heuristic evaluation failed - {0}")]
    Heuristic(String),

    /// Generic graph inconsistency.
    #[error("{0}")]
    GraphError(String),
}
