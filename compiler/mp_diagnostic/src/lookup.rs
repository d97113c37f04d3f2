use mp_results::{DiagnosticKind, ErrorResult};

/// Line-indexed view over the top-level diagnostics of one source.
///
/// Stack-trace entries are not consulted: an inline marker names the
/// diagnostic raised on that line, not the calls leading to it.
#[derive(Clone, Copy, Debug)]
pub struct LineDiagnostics<'a> {
    errors: &'a [ErrorResult],
    source: u32,
}

impl<'a> LineDiagnostics<'a> {
    pub fn new(errors: &'a [ErrorResult], source: u32) -> Self {
        LineDiagnostics { errors, source }
    }

    /// First error whose range starts on `line` (zero-based).
    pub fn first_error_for_line(&self, line: u32) -> Option<&'a ErrorResult> {
        self.first_for_line(line, DiagnosticKind::Error)
    }

    /// First warning whose range starts on `line` (zero-based).
    pub fn first_warning_for_line(&self, line: u32) -> Option<&'a ErrorResult> {
        self.first_for_line(line, DiagnosticKind::Warning)
    }

    /// First error on `line`, or else the first warning.
    pub fn most_severe_for_line(&self, line: u32) -> Option<&'a ErrorResult> {
        self.first_error_for_line(line)
            .or_else(|| self.first_warning_for_line(line))
    }

    fn first_for_line(&self, line: u32, kind: DiagnosticKind) -> Option<&'a ErrorResult> {
        self.errors.iter().find(|error| {
            error.kind == kind
                && error.range.start_line == line
                && error.range.source_index == self.source
        })
    }
}
