//! Typed, individually resettable algorithm arguments.

use std::fmt;

use strum::Display;

use crate::{graph::NodeId, Error, Result};

/// The kind of value an argument accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ArgumentKind {
    /// A node of the graph
    #[strum(serialize = "node")]
    Node,
    /// The name of a registered heuristic
    #[strum(serialize = "heuristic")]
    Heuristic,
}

/// A value assigned to an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentValue {
    /// A node of the graph
    Node(NodeId),
    /// The name of a registered heuristic
    Heuristic(String),
}

impl ArgumentValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        match self {
            ArgumentValue::Node(_) => ArgumentKind::Node,
            ArgumentValue::Heuristic(_) => ArgumentKind::Heuristic,
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Node(node) => write!(f, "{node}"),
            ArgumentValue::Heuristic(name) => f.write_str(name),
        }
    }
}

/// A named argument slot of an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: &'static str,
    kind: ArgumentKind,
    value: Option<ArgumentValue>,
}

impl Argument {
    /// Creates an empty node argument.
    #[must_use]
    pub const fn node(name: &'static str) -> Self {
        Argument {
            name,
            kind: ArgumentKind::Node,
            value: None,
        }
    }

    /// Creates an empty heuristic argument.
    #[must_use]
    pub const fn heuristic(name: &'static str) -> Self {
        Argument {
            name,
            kind: ArgumentKind::Heuristic,
            value: None,
        }
    }

    /// Creates a heuristic argument that already selects `default`.
    #[must_use]
    pub fn heuristic_with(name: &'static str, default: impl Into<String>) -> Self {
        Argument {
            name,
            kind: ArgumentKind::Heuristic,
            value: Some(ArgumentValue::Heuristic(default.into())),
        }
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kind of value the argument accepts.
    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// Returns the assigned value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&ArgumentValue> {
        self.value.as_ref()
    }

    /// Returns the assigned node, if this is a node argument with a value.
    #[must_use]
    pub fn as_node(&self) -> Option<NodeId> {
        match self.value {
            Some(ArgumentValue::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Returns the assigned heuristic name, if this is a heuristic argument with a value.
    #[must_use]
    pub fn as_heuristic(&self) -> Option<&str> {
        match &self.value {
            Some(ArgumentValue::Heuristic(name)) => Some(name),
            _ => None,
        }
    }

    /// Assigns a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentKindMismatch`] if the value has the wrong kind; the previous
    /// value is kept in that case.
    pub fn set(&mut self, value: ArgumentValue) -> Result<()> {
        if value.kind() != self.kind {
            return Err(Error::ArgumentKindMismatch {
                name: self.name.to_string(),
                expected: self.kind.to_string(),
            });
        }
        self.value = Some(value);
        Ok(())
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Returns the node assigned to the argument `name`, if present.
pub(crate) fn node_argument(arguments: &[Argument], name: &str) -> Option<NodeId> {
    arguments
        .iter()
        .find(|arg| arg.name == name)
        .and_then(Argument::as_node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut arg = Argument::node("Start");
        assert!(arg.value().is_none());
        arg.set(ArgumentValue::Node(NodeId::new(2))).unwrap();
        assert_eq!(arg.as_node(), Some(NodeId::new(2)));
        assert!(arg.as_heuristic().is_none());
        arg.reset();
        assert!(arg.as_node().is_none());
    }

    #[test]
    fn test_kind_mismatch_keeps_previous_value() {
        let mut arg = Argument::node("Start");
        arg.set(ArgumentValue::Node(NodeId::new(1))).unwrap();
        let err = arg
            .set(ArgumentValue::Heuristic("euclidean".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Argument 'Start' expects a node value");
        assert_eq!(arg.as_node(), Some(NodeId::new(1)));
    }

    #[test]
    fn test_heuristic_with_default() {
        let mut arg = Argument::heuristic_with("Heuristic", "euclidean");
        assert_eq!(arg.kind(), ArgumentKind::Heuristic);
        assert_eq!(arg.as_heuristic(), Some("euclidean"));
        arg.reset();
        assert!(arg.value().is_none());
    }

    #[test]
    fn test_node_argument_lookup() {
        let mut args = [Argument::node("Start"), Argument::heuristic("Heuristic")];
        args[0].set(ArgumentValue::Node(NodeId::new(5))).unwrap();
        args[1]
            .set(ArgumentValue::Heuristic("manhattan".into()))
            .unwrap();
        assert_eq!(node_argument(&args, "Start"), Some(NodeId::new(5)));
        assert_eq!(node_argument(&args, "Heuristic"), None);
        assert_eq!(node_argument(&args, "End"), None);
        assert_eq!(args[1].value().map(ToString::to_string).as_deref(), Some("manhattan"));
    }
}
