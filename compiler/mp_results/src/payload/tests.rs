use super::*;

#[test]
fn decodes_json_text() {
    let results = ResultPayload::from(r#"{"result": [], "errors": []}"#)
        .decode()
        .unwrap();

    assert!(results.result.is_empty());
    assert!(results.errors.is_empty());
}

#[test]
fn decodes_parsed_value() {
    let value = serde_json::json!({
        "result": [{"type": "Last", "src": 0, "line": 0}],
        "errors": []
    });
    let results = ResultPayload::from(value).decode().unwrap();

    assert_eq!(results.result.len(), 1);
}

#[test]
fn typed_results_pass_through() {
    let results = Results::default();
    let decoded = ResultPayload::from(results.clone()).decode().unwrap();

    assert_eq!(decoded, results);
}

#[test]
fn broken_json_is_a_syntax_error() {
    let err = ResultPayload::from(r#"{"result": [ "#).decode().unwrap_err();

    assert!(matches!(err, PayloadError::Syntax(_)));
    assert_eq!(err.name(), "SyntaxError");
    assert!(err.to_string().starts_with("result payload is not valid JSON"));
}

#[test]
fn missing_field_is_a_structure_error() {
    let err = ResultPayload::from(r#"{"result": []}"#).decode().unwrap_err();

    assert!(matches!(err, PayloadError::Structure(_)));
    assert_eq!(err.name(), "StructureError");
    assert!(err.to_string().contains("errors"));
}

#[test]
fn wrong_shape_value_is_a_structure_error() {
    let err = ResultPayload::from(serde_json::json!({"result": 3, "errors": []}))
        .decode()
        .unwrap_err();

    assert!(matches!(err, PayloadError::Structure(_)));
}

#[test]
fn syntax_error_location_points_into_text() {
    let err = ResultPayload::from("{\n  \"result\": x }").decode().unwrap_err();

    assert_eq!(err.location().0, 2);
}
