//! Step sequencing: the contract between algorithms and their driver.
//!
//! # Architecture
//!
//! - [`StepSequence`] - One algorithm run as a lazy, finite sequence of suspension points, each
//!   classified by a [`StopLevel`] and paired with exactly one event appended to an
//!   [`EventLog`]
//! - [`Flattener`] - Drives nested recursive [`Routine`]s through the same flat interface
//! - [`Algorithm`] - Name, typed [`Argument`]s, validation, and the factory for sequences
//! - [`Run`] - The driver: validation, decoration reset, and the three stepping granularities
//!
//! # Ordering Guarantee
//!
//! Skippable suspension points are a strict refinement of the checkpoint sequence: stepping
//! one point at a time and skipping from checkpoint to checkpoint produce the same event log.

mod algorithm;
mod argument;
mod flatten;
mod run;
mod sequence;

pub use algorithm::Algorithm;
pub use argument::{Argument, ArgumentKind, ArgumentValue};
pub use flatten::{Flattener, Routine, Yield};
pub use run::Run;
pub use sequence::{EventLog, StepContext, StepSequence, StopLevel};

pub(crate) use algorithm::required_node;
