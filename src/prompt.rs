use crate::core::models::ChatMessage;
use crate::errors::ChatError;

/// System message offered by default when none is supplied.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Builds the message sequence sent to the endpoint.
///
/// An empty system message is dropped, so the result is either
/// `[system, user]` or `[user]`. The user message is always last.
///
/// # Errors
///
/// Returns `ChatError::InvalidRequest` if `user_message` is empty.
pub fn build_messages(
    system_message: Option<&str>,
    user_message: &str,
) -> Result<Vec<ChatMessage>, ChatError> {
    if user_message.is_empty() {
        return Err(ChatError::InvalidRequest(
            "user message must not be empty".to_string(),
        ));
    }

    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_message.filter(|s| !s.is_empty()) {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(user_message));

    Ok(messages)
}
