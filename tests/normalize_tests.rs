use serde_json::json;
use yt_assist::errors::AssistError;
use yt_assist::normalize::normalize_result;

#[test]
fn test_array_of_strings_passes_through() {
    let result = json!(["first", "second"]);
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_array_elements_with_text_field() {
    let result = json!([{ "text": "from text field" }, "plain"]);
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments, vec!["from text field", "plain"]);
}

#[test]
fn test_array_elements_with_comment_thread_snippet() {
    let result = json!([{
        "snippet": { "topLevelComment": { "snippet": { "textDisplay": "nested" } } }
    }]);
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments, vec!["nested"]);
}

#[test]
fn test_unknown_array_elements_are_serialized() {
    let result = json!([{ "id": 7 }]);
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments.len(), 1, "length must be preserved");
    assert!(
        comments[0].contains("\"id\":7"),
        "unknown elements should be serialized, got: {}",
        comments[0]
    );
}

#[test]
fn test_empty_array_stays_empty() {
    let result = json!([]);
    let comments = normalize_result(Some(&result)).unwrap();
    assert!(comments.is_empty(), "zero-length sequences are still success");
}

#[test]
fn test_string_blob_splits_on_line_breaks() {
    let result = json!("a\nb\n\nc");
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments, vec!["a", "b", "c"], "empty lines are dropped");
}

#[test]
fn test_string_blob_handles_crlf_and_trims() {
    let result = json!("  a  \r\nb\r\n\r\n");
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments, vec!["a", "b"]);
}

#[test]
fn test_object_with_comments_field() {
    let result = json!({ "comments": ["x", { "odd": true }] });
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0], "x");
    assert!(comments[1].contains("odd"));
}

#[test]
fn test_arbitrary_object_becomes_single_element() {
    let result = json!({ "status": "weird" });
    let comments = normalize_result(Some(&result)).unwrap();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].contains("weird"));
}

#[test]
fn test_missing_result_is_empty_result_error() {
    assert!(matches!(
        normalize_result(None),
        Err(AssistError::EmptyResult)
    ));
    let null = json!(null);
    assert!(matches!(
        normalize_result(Some(&null)),
        Err(AssistError::EmptyResult)
    ));
}

#[test]
fn test_normalization_is_idempotent_on_same_input() {
    let result = json!(["a", { "text": "b" }, "c\nd"]);
    let first = normalize_result(Some(&result)).unwrap();
    let second = normalize_result(Some(&result)).unwrap();
    assert_eq!(first, second, "normalization is a pure function");
}
