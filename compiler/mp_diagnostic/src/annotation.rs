use std::fmt;

use mp_results::DiagnosticKind;
use serde::Serialize;

/// Severity of an [`Annotation`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl From<DiagnosticKind> for Severity {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Error => Severity::Error,
            DiagnosticKind::Warning => Severity::Warning,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic placed in the active document.
///
/// `from..to` are character offsets into the buffer the position resolver
/// describes. Serializes to the shape lint decorations expect:
/// `{ "message", "severity", "from", "to" }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Annotation {
    pub message: String,
    pub severity: Severity,
    pub from: usize,
    pub to: usize,
}

impl Annotation {
    pub fn is_zero_width(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {}: {}", self.from, self.to, self.severity, self.message)
    }
}
