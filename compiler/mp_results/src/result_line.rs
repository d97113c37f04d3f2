//! Computed lines and their value payloads.

use serde::{Deserialize, Serialize};

use crate::null_as_default;

/// Kind of value carried by a [`ResultLine`].
///
/// The engine tags lines with a type string. Older engine builds used
/// single-letter tags, which are accepted as aliases. Tags this version
/// does not know are kept verbatim and render as an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ValueKind {
    Number,
    Timepoint,
    Duration,
    List,
    Last,
    FunctionDef,
    Comment,
    Unknown(String),
    #[default]
    Missing,
}

impl ValueKind {
    /// Classify an engine type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Number" | "N" => ValueKind::Number,
            "Timepoint" | "T" => ValueKind::Timepoint,
            "Duration" | "D" => ValueKind::Duration,
            "List" | "L" => ValueKind::List,
            "Last" => ValueKind::Last,
            "FunctionDef" => ValueKind::FunctionDef,
            "Comment" => ValueKind::Comment,
            "" => ValueKind::Missing,
            other => ValueKind::Unknown(other.to_owned()),
        }
    }

    /// The canonical engine tag.
    pub fn as_str(&self) -> &str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Timepoint => "Timepoint",
            ValueKind::Duration => "Duration",
            ValueKind::List => "List",
            ValueKind::Last => "Last",
            ValueKind::FunctionDef => "FunctionDef",
            ValueKind::Comment => "Comment",
            ValueKind::Unknown(tag) => tag,
            ValueKind::Missing => "",
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ValueKind::Comment)
    }
}

impl From<String> for ValueKind {
    fn from(tag: String) -> Self {
        match ValueKind::from_tag(&tag) {
            ValueKind::Unknown(_) => ValueKind::Unknown(tag),
            known => known,
        }
    }
}

impl From<ValueKind> for String {
    fn from(kind: ValueKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// One computed (or annotated) line of a script.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResultLine {
    #[serde(rename = "type", default)]
    pub kind: ValueKind,
    /// Index of the source this line belongs to.
    #[serde(default)]
    pub src: u32,
    /// Zero-based line number within that source.
    #[serde(default)]
    pub line: u32,
    /// Name the value was assigned to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Suppress the value in the transcripts; the line still takes its slot.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub mute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationResult>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub list: Vec<ResultLine>,
    /// Source text of a function definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl ResultLine {
    /// A line of the given kind at `(src, line)` with no payload.
    pub fn new(kind: ValueKind, src: u32, line: u32) -> Self {
        ResultLine {
            kind,
            src,
            line,
            ..ResultLine::default()
        }
    }

    /// A `Number` line carrying a pre-formatted value.
    pub fn number(src: u32, line: u32, fmtd: impl Into<String>, unit: impl Into<String>) -> Self {
        ResultLine {
            number: Some(NumberResult::formatted(fmtd, unit)),
            ..ResultLine::new(ValueKind::Number, src, line)
        }
    }

    /// A `Comment` line.
    pub fn comment(src: u32, line: u32, text: impl Into<String>) -> Self {
        ResultLine {
            comment: Some(text.into()),
            ..ResultLine::new(ValueKind::Comment, src, line)
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn muted(mut self) -> Self {
        self.mute = true;
        self
    }

    /// The assigned name, treating an empty id as anonymous.
    pub fn name(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Significand as sent by the engine: a decimal string or a JSON number.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Significand {
    Text(String),
    Number(f64),
}

/// Numeric payload.
///
/// Either `fmtd` holds the engine-formatted text, or `sig`/`exp` hold the
/// raw value to be formatted on this side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NumberResult {
    /// Engine number format (`Dec`, `Hex`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fmt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<Significand>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exp: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fmtd: Option<String>,
    /// Unit suffix, possibly empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub u: String,
}

impl NumberResult {
    pub fn formatted(fmtd: impl Into<String>, unit: impl Into<String>) -> Self {
        NumberResult {
            fmtd: Some(fmtd.into()),
            u: unit.into(),
            ..NumberResult::default()
        }
    }

    pub fn raw(sig: Significand, exp: i32, unit: impl Into<String>) -> Self {
        NumberResult {
            sig: Some(sig),
            exp,
            u: unit.into(),
            ..NumberResult::default()
        }
    }
}

/// Timepoint payload, already formatted by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DateResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub formatted: String,
}

/// Duration payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DurationResult {
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub months: i64,
    #[serde(default)]
    pub days: i64,
}
