//! Value rendering.
//!
//! [`format_value`] is total: a missing payload or an unknown value kind
//! renders as an empty string.

use mp_results::{DurationResult, ResultLine, ValueKind, MAX_NESTING_DEPTH};

use crate::number::format_number;

/// Render the value carried by `line`, without its name.
pub fn format_value(line: &ResultLine) -> String {
    format_nested(line, 0)
}

fn format_nested(line: &ResultLine, depth: usize) -> String {
    match &line.kind {
        ValueKind::Number => line.number.as_ref().map(format_number).unwrap_or_default(),
        ValueKind::Timepoint => line
            .date
            .as_ref()
            .map(|date| date.formatted.clone())
            .unwrap_or_default(),
        ValueKind::Duration => line.duration.as_ref().map(format_duration).unwrap_or_default(),
        ValueKind::List => format_list(&line.list, depth),
        ValueKind::Last => "'last'".to_owned(),
        ValueKind::FunctionDef => "Function".to_owned(),
        ValueKind::Comment => line.comment.clone().unwrap_or_default(),
        ValueKind::Unknown(_) | ValueKind::Missing => String::new(),
    }
}

fn format_duration(duration: &DurationResult) -> String {
    format!(
        "{} years, {} months, {} days",
        duration.years, duration.months, duration.days
    )
}

fn format_list(values: &[ResultLine], depth: usize) -> String {
    if depth + 1 >= MAX_NESTING_DEPTH {
        tracing::warn!(depth, "list nested too deeply, elements not rendered");
        return String::new();
    }
    let items: Vec<String> = values
        .iter()
        .map(|value| format_nested(value, depth + 1))
        .collect();
    format!("({})", items.join(", "))
}
