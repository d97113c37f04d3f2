//! Result rendering pipeline.
//!
//! Single entry point between the evaluation engine and the editor: take
//! one result payload, produce the output transcript, the result
//! transcript and the diagnostics annotations for the active source.
//!
//! ```text
//! payload ──decode──► Results ──► mp_fmt::build_transcripts ──► output / result text
//!                              └─► mp_diagnostic::to_annotations ──► annotations
//! ```
//!
//! A payload that cannot be decoded does not fail the pass: both
//! transcripts then describe the failure and no annotations are produced.
//! A diagnostic that does not fit the live document does fail it, with a
//! [`PositionError`]; the host should render again from a fresh result.
//!
//! All state lives in the [`RenderContext`] the host passes in, so passes
//! are independent of each other.

mod context;
mod render;
mod sink;

pub use context::{DisplayOptions, RenderContext};
pub use render::{render, render_into, Rendered};
pub use sink::{DisplaySink, StringSink};

pub use mp_diagnostic::{
    Annotation, LineOffsetTable, PositionError, PositionResolver, Severity, SourceRegistry,
};
pub use mp_fmt::Layout;
pub use mp_results::{PayloadError, ResultPayload, Results};
