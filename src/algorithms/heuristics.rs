//! Named heuristic functions for A*.
//!
//! A [`HeuristicRegistry`] maps names to callables of `(current, target) -> estimate`. It is
//! handed to [`AStar`](crate::algorithms::AStar) at construction; callers register their own
//! functions next to the four presets. Heuristics only ever see [`NodeInfo`] snapshots.

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{graph::NodeInfo, Error, Result};

/// A heuristic callable: estimated remaining distance from the first node to the second.
pub type Heuristic = Arc<dyn Fn(&NodeInfo<'_>, &NodeInfo<'_>) -> Result<f64> + Send + Sync>;

/// Straight-line distance between the two positions.
#[must_use]
pub fn euclidean(current: &NodeInfo<'_>, target: &NodeInfo<'_>) -> f64 {
    let dx = target.x - current.x;
    let dy = target.y - current.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of the absolute coordinate differences.
#[must_use]
pub fn manhattan(current: &NodeInfo<'_>, target: &NodeInfo<'_>) -> f64 {
    (target.x - current.x).abs() + (target.y - current.y).abs()
}

/// Name → heuristic lookup table.
///
/// # Examples
///
/// ```rust
/// use graphstep::{algorithms::HeuristicRegistry, graph::NodeInfo};
///
/// let mut registry = HeuristicRegistry::with_presets();
/// registry.register("zero", |_, _| Ok(0.0));
///
/// let a = NodeInfo { id: "A", g: Some(0.0), x: 0.0, y: 0.0 };
/// let b = NodeInfo { id: "B", g: None, x: 3.0, y: 4.0 };
/// assert_eq!(registry.evaluate("euclidean", &a, &b)?, 5.0);
/// assert_eq!(registry.evaluate("manhattan_percent", &a, &b)?, 0.07);
/// assert_eq!(registry.evaluate("zero", &a, &b)?, 0.0);
/// # Ok::<(), graphstep::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct HeuristicRegistry {
    entries: BTreeMap<String, Heuristic>,
}

impl HeuristicRegistry {
    /// Name of the heuristic A* selects by default.
    pub const DEFAULT: &'static str = "euclidean";

    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `euclidean`, `manhattan`, `euclidean_percent` and
    /// `manhattan_percent` (the latter two divided by 100).
    #[must_use]
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        registry.register("euclidean", |a, b| Ok(euclidean(a, b)));
        registry.register("manhattan", |a, b| Ok(manhattan(a, b)));
        registry.register("euclidean_percent", |a, b| Ok(euclidean(a, b) / 100.0));
        registry.register("manhattan_percent", |a, b| Ok(manhattan(a, b) / 100.0));
        registry
    }

    /// Registers `function` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&NodeInfo<'_>, &NodeInfo<'_>) -> Result<f64> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(function));
    }

    /// Returns the heuristic registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Heuristic> {
        self.entries.get(name).cloned()
    }

    /// Returns `true` if a heuristic is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Evaluates the heuristic registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownHeuristic`] if nothing is registered under `name`, or whatever
    /// error the heuristic itself returns.
    pub fn evaluate(
        &self,
        name: &str,
        current: &NodeInfo<'_>,
        target: &NodeInfo<'_>,
    ) -> Result<f64> {
        let function = self
            .entries
            .get(name)
            .ok_or_else(|| Error::UnknownHeuristic(name.to_string()))?;
        function(current, target)
    }
}

impl fmt::Debug for HeuristicRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Evaluates `heuristic`, substituting `0.0` for failures and non-finite results.
pub(crate) fn evaluate_or_zero(
    heuristic: &Heuristic,
    current: &NodeInfo<'_>,
    target: &NodeInfo<'_>,
) -> f64 {
    match heuristic(current, target) {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            log::error!(
                "heuristic returned {value} for {} -> {}, using 0",
                current.id,
                target.id
            );
            0.0
        }
        Err(err) => {
            log::error!(
                "heuristic failed for {} -> {}: {err}, using 0",
                current.id,
                target.id
            );
            0.0
        }
    }
}
