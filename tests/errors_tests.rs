use std::error::Error;
use grok_chat::errors::ChatError;
use serde_json::json;

#[test]
fn test_chat_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ChatError::Transport("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_chat_error_display() {
    let error = ChatError::Transport("connection refused".to_string());
    assert_eq!(format!("{error}"), "Request Error: connection refused");

    let error = ChatError::MissingCredential("no key".to_string());
    assert_eq!(format!("{error}"), "Missing credential: no key");

    let error = ChatError::InvalidRequest("user message must not be empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid request: user message must not be empty"
    );
}

#[test]
fn test_api_json_is_pretty_printed() {
    let error = ChatError::api_json(&json!({"error": "invalid key"}));
    assert_eq!(
        format!("{error}"),
        "API Error: {\n  \"error\": \"invalid key\"\n}"
    );
}

#[test]
fn test_api_text_keeps_http_error_and_body() {
    let error = ChatError::api_text("HTTP status server error (502 Bad Gateway)", "<html>bad gateway</html>");
    assert_eq!(
        format!("{error}"),
        "API Error: HTTP status server error (502 Bad Gateway)\nResponse: <html>bad gateway</html>"
    );
}

#[test]
fn test_chat_error_from_conversions() {
    // Only checks that the conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> ChatError {
        ChatError::from(err)
    }
}
