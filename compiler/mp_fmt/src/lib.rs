//! Result Formatter
//!
//! Renders evaluated lines as text for the editor's side panes.
//!
//! # Transcripts
//!
//! One evaluation pass produces two transcripts:
//!
//! - **output**: one rendered line per [`ResultLine`], in payload order,
//!   with names, trailing text and comments.
//! - **result**: aligned to the lines of the active source. Source lines
//!   without a value get a blank line; several values on one source line
//!   are joined with `" | "`; comments lead the line. In the wide layout
//!   each line can be prefixed with an `[error:...]` or `[warning:...]`
//!   marker.
//!
//! # Modules
//!
//! - [`number`]: numeric payload formatting
//! - [`value`]: one value per [`ValueKind`](mp_results::ValueKind)
//! - [`line`]: whole-line rendering for either transcript
//! - [`layout`]: wide/narrow selection
//! - [`transcript`]: the line-alignment algorithm
//!
//! [`ResultLine`]: mp_results::ResultLine

pub mod layout;
pub mod line;
pub mod number;
pub mod transcript;
pub mod value;

pub use layout::{Layout, WIDE_LAYOUT_MIN_WIDTH};
pub use line::{format_output_line, format_result_line};
pub use number::{format_number, format_significand};
pub use transcript::{
    build_output_transcript, build_result_transcript, build_transcripts, Transcripts,
};
pub use value::format_value;
