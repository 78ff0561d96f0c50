//! Integration tests for propset-core's public API.

use propset_core::prelude::*;

#[test]
fn round_trip_through_public_api() {
    let text = "server.port=8080\n#debug.enabled=true\njdbc.url=host=db\n";
    let store = PropertiesStore::parse(text).unwrap();
    assert_eq!(store.serialize(), text);
}

#[test]
fn edit_workflow_through_prelude() {
    let request = EditRequest::builder()
        .set("server.port", "9090")
        .uncomment("debug.enabled")
        .build();

    let outcome = EditService::edit(
        Some("server.port=8080\n#debug.enabled=true\n"),
        &request,
    )
    .unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.text, "server.port=9090\ndebug.enabled=true\n");
}

#[test]
fn entry_serializes_to_json() {
    // The CLI's `show --format json` relies on Entry's Serialize impl.
    let entry = Entry::commented("key2", "val2");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["key"], "key2");
    assert_eq!(json["value"], "val2");
    assert_eq!(json["commented"], true);
}

#[test]
fn mixed_operation_request_reports_invalid_from_scratch() {
    let request = EditRequest::builder().comment("key1").build();
    let err = EditService::edit(None, &request).unwrap_err();
    assert!(matches!(err, PropsetError::Application(_)));
    assert!(!err.suggestions().is_empty());
}
