//! Transcript building.
//!
//! The result transcript has exactly one line per line of the active
//! source, up to the last line that produced a value:
//!
//! ```text
//! source               result
//! a = 2                a=2
//! (blank)              (blank)
//! b = a * 3 // rent    rent b=6
//! [1, 2]; a + 1        (1, 2) | 3
//! ```

use mp_diagnostic::LineDiagnostics;
use mp_results::{ResultLine, Results};

use crate::layout::Layout;
use crate::line::{format_output_line, format_result_line};

/// Separator between values that share a source line.
const VALUE_SEPARATOR: &str = " | ";

/// Both rendered views of one evaluation result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcripts {
    pub output_text: String,
    pub result_text: String,
}

/// Build the output and result transcripts for `active_source`.
pub fn build_transcripts(
    results: &Results,
    active_source: u32,
    show_errors: bool,
    layout: Layout,
) -> Transcripts {
    Transcripts {
        output_text: build_output_transcript(&results.result),
        result_text: build_result_transcript(results, active_source, show_errors, layout),
    }
}

/// One line per result line, of every source, joined by newlines.
pub fn build_output_transcript(lines: &[ResultLine]) -> String {
    lines
        .iter()
        .map(format_output_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay out the values of `active_source` along its source lines.
///
/// Markers for the first error (or else first warning) of each line are
/// added only when `show_errors` is set and the layout is wide.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(source = active_source, lines = results.result.len())
)]
pub fn build_result_transcript(
    results: &Results,
    active_source: u32,
    show_errors: bool,
    layout: Layout,
) -> String {
    let markers = (show_errors && layout.is_wide())
        .then(|| LineDiagnostics::new(&results.errors, active_source));
    let mut transcript = ResultTranscript::new(markers);

    for line in results.lines_for_source(active_source) {
        transcript.advance_to(line.line);
        let value = format_result_line(line, layout);
        tracing::trace!(line = line.line, kind = line.kind.as_str(), %value, "result value");
        transcript.push(&value, line.kind.is_comment());
    }
    transcript.finish()
}

/// Accumulates the result transcript one source line at a time.
struct ResultTranscript<'a> {
    out: String,
    /// Content of the line being built.
    current: String,
    /// Zero-based source line `current` belongs to.
    line: u32,
    markers: Option<LineDiagnostics<'a>>,
}

impl<'a> ResultTranscript<'a> {
    fn new(markers: Option<LineDiagnostics<'a>>) -> Self {
        ResultTranscript {
            out: String::new(),
            current: String::new(),
            line: 0,
            markers,
        }
    }

    /// Close lines until `target` is the current line.
    ///
    /// Lines are never reopened: a target at or before the current line
    /// keeps adding to it.
    fn advance_to(&mut self, target: u32) {
        while self.line < target {
            self.flush_line();
            self.out.push('\n');
            self.line += 1;
        }
    }

    fn push(&mut self, value: &str, is_comment: bool) {
        if value.is_empty() {
            return;
        }
        if self.current.is_empty() {
            self.current.push_str(value);
        } else if is_comment {
            // comments lead the line
            self.current = format!("{value} {}", self.current);
        } else {
            self.current.push_str(VALUE_SEPARATOR);
            self.current.push_str(value);
        }
    }

    fn flush_line(&mut self) {
        if let Some(marker) = self.marker() {
            self.out.push_str(&marker);
        }
        self.out.push_str(&self.current);
        self.current.clear();
    }

    /// `[error:<msg>]` or `[warning:<msg>]` for the current line.
    fn marker(&self) -> Option<String> {
        let diagnostic = self.markers?.most_severe_for_line(self.line)?;
        Some(format!("[{}:{}]", diagnostic.kind, diagnostic.msg))
    }

    fn finish(mut self) -> String {
        self.flush_line();
        self.out
    }
}
