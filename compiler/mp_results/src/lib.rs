//! Evaluation result model.
//!
//! The math parser engine answers every evaluation pass with one JSON
//! document: a flat list of computed lines (one or more per source line)
//! and the diagnostics raised while resolving them.
//!
//! ```text
//! { "result": [ResultLine, ...], "errors": [ErrorResult, ...] }
//! ```
//!
//! Lines of a given source arrive ordered by line number. Several entries
//! may share the same `(src, line)` pair.

mod error_result;
mod payload;
mod result_line;

pub use error_result::{DiagnosticKind, ErrorResult, SourceRange};
pub use payload::{PayloadError, ResultPayload};
pub use result_line::{
    DateResult, DurationResult, NumberResult, ResultLine, Significand, ValueKind,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum nesting followed through `list` values and stack traces.
///
/// Well-formed payloads are acyclic trees a few levels deep; anything past
/// this depth is cut off rather than walked.
pub const MAX_NESTING_DEPTH: usize = 64;

/// One complete evaluation result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Results {
    /// Computed lines, in engine order.
    pub result: Vec<ResultLine>,
    /// Top-level diagnostics.
    pub errors: Vec<ErrorResult>,
}

impl Results {
    /// Lines belonging to `source`, in payload order.
    pub fn lines_for_source(&self, source: u32) -> impl Iterator<Item = &ResultLine> + '_ {
        self.result.iter().filter(move |line| line.src == source)
    }

    /// Highest line number among the lines of `source`.
    pub fn last_line_of(&self, source: u32) -> Option<u32> {
        self.lines_for_source(source).map(|line| line.line).max()
    }
}

/// Deserialize `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
