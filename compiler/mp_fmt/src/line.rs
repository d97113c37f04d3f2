//! Whole-line rendering.

use mp_results::ResultLine;

use crate::layout::Layout;
use crate::value::format_value;

/// Render `line` for the output transcript.
///
/// `name=value` (the value is left out for muted lines), then the line's
/// trailing text and `//` comment. Comment lines render their text.
pub fn format_output_line(line: &ResultLine) -> String {
    if line.kind.is_comment() {
        return format_value(line);
    }

    let mut text = String::new();
    if !line.mute {
        push_named_value(&mut text, line);
    }
    if let Some(trailing) = line.text.as_deref().filter(|t| !t.is_empty()) {
        text.push(' ');
        text.push_str(trailing);
    }
    if let Some(comment) = line.comment.as_deref().filter(|c| !c.is_empty()) {
        text.push_str(" //");
        text.push_str(comment);
    }
    text
}

/// Render `line` for one slot of the result transcript.
///
/// The wide layout shows `name=value`; the narrow layout only the value.
/// Comment lines render their text in both. `mute` only applies to the
/// output transcript.
pub fn format_result_line(line: &ResultLine, layout: Layout) -> String {
    if line.kind.is_comment() {
        return format_value(line);
    }
    match layout {
        Layout::Wide => {
            let mut text = String::new();
            push_named_value(&mut text, line);
            text
        }
        Layout::Narrow => format_value(line),
    }
}

fn push_named_value(out: &mut String, line: &ResultLine) {
    if let Some(name) = line.name() {
        out.push_str(name);
        out.push('=');
    }
    out.push_str(&format_value(line));
}
