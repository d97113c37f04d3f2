//! Diagnostics mapping.
//!
//! The engine reports diagnostics against `(source, line, column)` ranges.
//! An editor decorates a single live buffer addressed by flat character
//! offsets. This crate bridges the two:
//!
//! - [`to_annotations`] flattens every diagnostic (stack traces included,
//!   pre-order) into an [`Annotation`] with offsets in the active buffer.
//!   Diagnostics from other sources collapse to a zero-width marker at the
//!   start of the buffer and carry a `[<source name>]: ` prefix.
//! - [`LineDiagnostics`] answers "first error / first warning on line N"
//!   for inline markers in the result pane.
//!
//! Offsets come from a [`PositionResolver`] supplied by the host. A range
//! that no longer fits the buffer is a hard [`PositionError`]: the result
//! is stale and has to be rendered again.

mod annotation;
mod lookup;
mod mapper;
mod position;
mod sources;

pub use annotation::{Annotation, Severity};
pub use lookup::LineDiagnostics;
pub use mapper::to_annotations;
pub use position::{LineOffsetTable, PositionError, PositionResolver};
pub use sources::SourceRegistry;
