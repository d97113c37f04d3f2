use super::*;
use pretty_assertions::assert_eq;

const ENGINE_PAYLOAD: &str = r#"{
    "result": [
        {"id": "a", "type": "Number", "src": 1, "line": 0,
         "number": {"fmt": "Dec", "fmtd": "2", "u": ""}},
        {"id": "_", "type": "Comment", "src": 1, "line": 1, "comment": "// total"},
        {"type": "Number", "src": 0, "line": 3, "number": {"sig": "1.5", "exp": 3, "u": "m"}},
        {"type": "List", "src": 1, "line": 2, "list": [
            {"type": "N", "src": 1, "line": 2, "number": {"fmtd": "1", "u": ""}},
            {"type": "N", "src": 1, "line": 2, "number": {"fmtd": "2", "u": ""}}
        ]}
    ],
    "errors": [
        {"id": "VarNotDef", "type": "E", "msg": "variable `b` is not defined.",
         "range": {"sourceIndex": 1, "startLine": 2, "startPos": 4, "endLine": 2, "endPos": 5},
         "stackTrace": []}
    ]
}"#;

#[test]
fn decodes_engine_payload() {
    let results: Results = serde_json::from_str(ENGINE_PAYLOAD).unwrap();

    assert_eq!(results.result.len(), 4);
    assert_eq!(results.result[0].name(), Some("a"));
    assert_eq!(results.result[1].kind, ValueKind::Comment);
    assert_eq!(results.result[3].list.len(), 2);
    assert_eq!(results.result[3].list[0].kind, ValueKind::Number);

    let error = &results.errors[0];
    assert_eq!(error.id.as_deref(), Some("VarNotDef"));
    assert_eq!(error.kind, DiagnosticKind::Error);
    assert_eq!(error.range, SourceRange::new(1, (2, 4), (2, 5)));
    assert!(error.stack_trace.is_empty());
}

#[test]
fn lines_for_source_keeps_payload_order() {
    let results: Results = serde_json::from_str(ENGINE_PAYLOAD).unwrap();

    let lines: Vec<u32> = results.lines_for_source(1).map(|line| line.line).collect();
    assert_eq!(lines, vec![0, 1, 2]);
    assert_eq!(results.last_line_of(1), Some(2));
    assert_eq!(results.last_line_of(0), Some(3));
    assert_eq!(results.last_line_of(7), None);
}

#[test]
fn null_collections_decode_as_empty() {
    let json = r#"{
        "result": [{"type": "List", "src": 0, "line": 0, "list": null}],
        "errors": [{"type": "W", "msg": "careful", "range": {"sourceIndex": 0,
            "startLine": 0, "startPos": 0, "endLine": 0, "endPos": 1}, "stackTrace": null}]
    }"#;
    let results: Results = serde_json::from_str(json).unwrap();

    assert!(results.result[0].list.is_empty());
    assert!(results.errors[0].stack_trace.is_empty());
    assert!(results.errors[0].is_warning());
}

#[test]
fn unknown_diagnostic_type_is_an_error() {
    let json = r#"{"result": [], "errors": [{"type": "X", "msg": "odd"}]}"#;
    let results: Results = serde_json::from_str(json).unwrap();

    assert_eq!(results.errors[0].kind, DiagnosticKind::Error);
}

#[test]
fn diagnostic_kind_round_trips_engine_tags() {
    let warning = ErrorResult::warning("w", SourceRange::default());
    let json = serde_json::to_value(&warning).unwrap();

    assert_eq!(json["type"], "W");
    assert_eq!(json["range"]["sourceIndex"], 0);
    assert_eq!(json["stackTrace"], serde_json::json!([]));
}
