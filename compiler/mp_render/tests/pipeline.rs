//! End-to-end render passes over engine-shaped payloads.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use mp_render::{
    render, render_into, Annotation, DisplayOptions, DisplaySink, Layout, LineOffsetTable,
    RenderContext, Severity, SourceRegistry,
};
use pretty_assertions::assert_eq;

const START: &str = "tax = 21%\nunit eur\n";
const MAIN: &str = "// budget\nrent = 1200 eur\nfood = 300 eur\n\ntotal = rent + food; total * tax\n";

/// Payload for evaluating `start` (source 0) followed by `main` (source 1).
const PAYLOAD: &str = r#"{
    "result": [
        {"id": "tax", "type": "Number", "src": 0, "line": 0, "number": {"fmt": "Dec", "fmtd": "0.21", "u": ""}},
        {"type": "Comment", "src": 1, "line": 0, "comment": "budget"},
        {"id": "rent", "type": "Number", "src": 1, "line": 1, "number": {"fmt": "Dec", "sig": "1.2", "exp": 3, "u": "eur"}},
        {"id": "food", "type": "Number", "src": 1, "line": 2, "number": {"fmt": "Dec", "sig": "300.000000", "exp": 0, "u": "eur"}},
        {"id": "total", "type": "Number", "src": 1, "line": 4, "number": {"fmtd": "1500", "u": "eur"}, "mute": true},
        {"type": "Number", "src": 1, "line": 4, "number": {"fmtd": "315", "u": "eur"}}
    ],
    "errors": [
        {"id": "WAssumingUnit", "type": "W", "msg": "assuming same unit",
         "range": {"sourceIndex": 1, "startLine": 4, "startPos": 21, "endLine": 4, "endPos": 32},
         "stackTrace": []},
        {"id": "UnitNotDef", "type": "E", "msg": "unit `eur` is not defined.",
         "range": {"sourceIndex": 0, "startLine": 1, "startPos": 5, "endLine": 1, "endPos": 8},
         "stackTrace": [
            {"type": "E", "msg": "used here",
             "range": {"sourceIndex": 1, "startLine": 1, "startPos": 12, "endLine": 1, "endPos": 15},
             "stackTrace": []}
         ]}
    ]
}"#;

fn sources() -> SourceRegistry {
    SourceRegistry::from_names(["start", "main"])
}

#[test]
fn minimal_two_value_scenario() {
    let payload = r#"{"result": [
        {"type": "Number", "src": 0, "line": 0, "id": "a", "number": {"fmtd": "2", "u": ""}},
        {"type": "Number", "src": 0, "line": 2, "number": {"fmtd": "5", "u": ""}}
    ], "errors": []}"#;

    let rendered = render(payload, &RenderContext::new(0), &LineOffsetTable::build("")).unwrap();

    assert_eq!(rendered.result_text, "a=2\n\n5");
}

#[test]
fn main_script_in_wide_layout() {
    let ctx = RenderContext::new(1).with_sources(sources());
    let document = LineOffsetTable::build(MAIN);

    let rendered = render(PAYLOAD, &ctx, &document).unwrap();

    assert_eq!(
        rendered.result_text,
        "budget\nrent=1.2E3eur\nfood=300eur\n\n[warning:assuming same unit]total=1500eur | 315eur"
    );
    assert_eq!(
        rendered.output_text,
        "tax=0.21\nbudget\nrent=1.2E3eur\nfood=300eur\n\n315eur"
    );
}

#[test]
fn main_script_annotations() {
    let ctx = RenderContext::new(1).with_sources(sources());
    let document = LineOffsetTable::build(MAIN);

    let rendered = render(PAYLOAD, &ctx, &document).unwrap();

    assert_eq!(
        rendered.annotations,
        vec![
            Annotation {
                message: "assuming same unit".to_owned(),
                severity: Severity::Warning,
                from: 63,
                to: 74,
            },
            Annotation {
                message: "[start]: unit `eur` is not defined.".to_owned(),
                severity: Severity::Error,
                from: 0,
                to: 0,
            },
            Annotation {
                message: "used here".to_owned(),
                severity: Severity::Error,
                from: 22,
                to: 25,
            },
        ]
    );
}

#[test]
fn start_script_view() {
    let ctx = RenderContext::new(0).with_sources(sources());
    let document = LineOffsetTable::build(START);

    let rendered = render(PAYLOAD, &ctx, &document).unwrap();

    // the error sits past the last value line, so it gets no marker
    assert_eq!(rendered.result_text, "tax=0.21");
    let messages: Vec<&str> = rendered.annotations.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "[main]: assuming same unit",
            "unit `eur` is not defined.",
            "[main]: used here"
        ]
    );
    assert_eq!((rendered.annotations[1].from, rendered.annotations[1].to), (15, 18));
}

#[test]
fn narrow_viewport_hides_names_and_markers() {
    let ctx = RenderContext::new(1)
        .with_sources(sources())
        .with_options(DisplayOptions::for_viewport(600, true));
    let document = LineOffsetTable::build(MAIN);

    let rendered = render(PAYLOAD, &ctx, &document).unwrap();

    assert_eq!(ctx.options.layout, Layout::Narrow);
    assert_eq!(rendered.result_text, "budget\n1.2E3eur\n300eur\n\n1500eur | 315eur");
}

/// A host surface that records every write.
#[derive(Default)]
struct RecordingPanes {
    writes: Vec<(&'static str, String)>,
}

impl DisplaySink for RecordingPanes {
    fn write_output(&mut self, text: &str) {
        self.writes.push(("output", text.to_owned()));
    }

    fn write_result(&mut self, text: &str) {
        self.writes.push(("result", text.to_owned()));
    }
}

#[test]
fn host_sink_receives_each_pane_once() {
    let ctx = RenderContext::new(1).with_sources(sources());
    let document = LineOffsetTable::build(MAIN);
    let mut panes = RecordingPanes::default();

    let annotations = render_into(PAYLOAD, &ctx, &document, &mut panes).unwrap();

    assert_eq!(annotations.len(), 3);
    let targets: Vec<&str> = panes.writes.iter().map(|(pane, _)| *pane).collect();
    assert_eq!(targets, vec!["output", "result"]);
}

#[test]
fn repeated_passes_do_not_accumulate() {
    let ctx = RenderContext::new(1).with_sources(sources());
    let document = LineOffsetTable::build(MAIN);

    let first = render(PAYLOAD, &ctx, &document).unwrap();
    let second = render(PAYLOAD, &ctx, &document).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.annotations.len(), 3);
}

#[test]
fn host_closure_as_resolver() {
    let starts = [0usize, 100, 200, 300, 400];
    let resolver = |line: u32| -> Option<usize> { starts.get(line as usize - 1).copied() };
    let ctx = RenderContext::new(1).with_sources(sources());

    let rendered = render(PAYLOAD, &ctx, &resolver).unwrap();

    assert_eq!((rendered.annotations[0].from, rendered.annotations[0].to), (421, 432));
}
