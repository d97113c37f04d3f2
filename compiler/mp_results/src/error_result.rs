//! Diagnostics reported by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::null_as_default;

/// Kind of an engine diagnostic.
///
/// The engine sends `"E"` or `"W"`. Anything other than `"W"` is treated
/// as an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum DiagnosticKind {
    #[default]
    Error,
    Warning,
}

impl DiagnosticKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "W" {
            DiagnosticKind::Warning
        } else {
            DiagnosticKind::Error
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "E",
            DiagnosticKind::Warning => "W",
        }
    }
}

impl From<String> for DiagnosticKind {
    fn from(tag: String) -> Self {
        DiagnosticKind::from_tag(&tag)
    }
}

impl From<DiagnosticKind> for String {
    fn from(kind: DiagnosticKind) -> Self {
        kind.tag().to_owned()
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "error"),
            DiagnosticKind::Warning => write!(f, "warning"),
        }
    }
}

/// Location of a diagnostic inside one source.
///
/// Lines and positions are zero-based; positions count characters from
/// the start of their line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRange {
    #[serde(default)]
    pub source_index: u32,
    #[serde(default)]
    pub start_line: u32,
    #[serde(default)]
    pub start_pos: u32,
    #[serde(default)]
    pub end_line: u32,
    #[serde(default)]
    pub end_pos: u32,
}

impl SourceRange {
    pub fn new(source_index: u32, start: (u32, u32), end: (u32, u32)) -> Self {
        SourceRange {
            source_index,
            start_line: start.0,
            start_pos: start.1,
            end_line: end.0,
            end_pos: end.1,
        }
    }
}

/// An error or warning, with the call chain that led to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResult {
    /// Engine error code, e.g. `VarNotDef`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: DiagnosticKind,
    #[serde(default)]
    pub range: SourceRange,
    /// Nested diagnostics, outermost call first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stack_trace: Vec<ErrorResult>,
}

impl ErrorResult {
    pub fn error(msg: impl Into<String>, range: SourceRange) -> Self {
        ErrorResult {
            msg: msg.into(),
            kind: DiagnosticKind::Error,
            range,
            ..ErrorResult::default()
        }
    }

    pub fn warning(msg: impl Into<String>, range: SourceRange) -> Self {
        ErrorResult {
            kind: DiagnosticKind::Warning,
            ..ErrorResult::error(msg, range)
        }
    }

    #[must_use]
    pub fn with_stack_trace(mut self, stack_trace: Vec<ErrorResult>) -> Self {
        self.stack_trace = stack_trace;
        self
    }

    pub fn is_warning(&self) -> bool {
        self.kind == DiagnosticKind::Warning
    }
}
