use serde_json::Value;
use yt_assist::clients::backend::BackendCommand;

#[test]
fn test_fetch_comments_command_encoding() {
    let command = BackendCommand::FetchComments {
        video_id: "abc123".to_string(),
    };
    let encoded = serde_json::to_string(&command).unwrap();
    let value: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(
        value.get("action").and_then(Value::as_str),
        Some("fetch_comments")
    );
    assert_eq!(value.get("video_id").and_then(Value::as_str), Some("abc123"));
}

#[test]
fn test_server_side_action_encodings() {
    let summarize = BackendCommand::SummarizeComments {
        video_id: "v".to_string(),
    };
    let sentiment = BackendCommand::AnalyzeSentiment {
        video_id: "v".to_string(),
    };

    let summarize: Value =
        serde_json::from_str(&serde_json::to_string(&summarize).unwrap()).unwrap();
    let sentiment: Value =
        serde_json::from_str(&serde_json::to_string(&sentiment).unwrap()).unwrap();

    assert_eq!(
        summarize.get("action").and_then(Value::as_str),
        Some("summarize_comments")
    );
    assert_eq!(
        sentiment.get("action").and_then(Value::as_str),
        Some("analyze_sentiment")
    );
}
