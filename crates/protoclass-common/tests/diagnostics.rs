use protoclass_common::diagnostics::{
    DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages, get_diagnostic_message,
    get_message_template,
};
use protoclass_common::{Diagnostic, DiagnosticCategory, format_message};

#[test]
fn test_format_message_fills_placeholders() {
    let text = format_message("The class {0} could not be found.", &["a.B"]);
    assert_eq!(text, "The class a.B could not be found.");
}

#[test]
fn test_format_message_repeated_placeholder() {
    let text = format_message("{0} and {0} vs {1}", &["x", "y"]);
    assert_eq!(text, "x and x vs y");
}

#[test]
fn test_message_table_lookup() {
    let msg = get_diagnostic_message(diagnostic_codes::CLASS_REDEFINED)
        .expect("class redefined message should exist");
    assert_eq!(msg.key, "CLASS_REDEFINED_ERROR");
    assert_eq!(msg.category, DiagnosticCategory::Error);

    assert_eq!(
        get_message_template(diagnostic_codes::UNKNOWN_CLASS),
        Some("The class {0} could not be found.")
    );
    assert!(get_message_template(1).is_none());
    assert_eq!(DIAGNOSTIC_MESSAGES.len(), 2);
}

#[test]
fn test_diagnostic_from_message() {
    let diag = Diagnostic::from_message(
        &diagnostic_messages::CLASS_REDEFINED,
        "a.js",
        10,
        4,
        &["Foo"],
    );
    assert_eq!(diag.code, 9001);
    assert_eq!(diag.file, "a.js");
    assert_eq!(diag.start, 10);
    assert_eq!(diag.length, 4);
    assert_eq!(
        diag.message_text,
        "The class Foo has been defined multiple times within the same file."
    );
}

#[test]
fn test_diagnostic_serializes_category_by_name() {
    let diag = Diagnostic::error("b.js", 0, 1, "oops", 9002);
    let json = serde_json::to_string(&diag).expect("diagnostic should serialize");
    assert!(json.contains("\"category\":\"Error\""), "{json}");
    assert!(json.contains("\"code\":9002"), "{json}");
}
