use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ChatError;
use crate::prompt::build_messages;

pub const DEFAULT_MODEL: &str = "grok-2-latest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling temperature, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// # Errors
    ///
    /// Returns `ChatError::InvalidRequest` for NaN or values outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, ChatError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ChatError::InvalidRequest(format!(
                "temperature must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Everything needed for one chat-completion call except the credential.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    model: String,
    temperature: Temperature,
    messages: Vec<ChatMessage>,
}

impl RequestConfig {
    /// Falls back to [`DEFAULT_MODEL`] when `model` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::InvalidRequest` if the user message or model name is blank.
    pub fn new(
        model: Option<&str>,
        temperature: Temperature,
        system_message: Option<&str>,
        user_message: &str,
    ) -> Result<Self, ChatError> {
        let messages = build_messages(system_message, user_message)?;

        let model = match model {
            Some(m) if m.trim().is_empty() => {
                return Err(ChatError::InvalidRequest(
                    "model name must not be empty".to_string(),
                ));
            }
            Some(m) => m.to_string(),
            None => DEFAULT_MODEL.to_string(),
        };

        Ok(Self {
            model,
            temperature,
            messages,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Wire body for `POST /v1/chat/completions`.
    #[must_use]
    pub fn payload(&self) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            messages: &self.messages,
            model: &self.model,
            stream: false,
            temperature: self.temperature,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub model: &'a str,
    pub stream: bool,
    pub temperature: Temperature,
}

/// Response body as returned by the endpoint, kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    #[must_use]
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    /// `choices[0].message.content`, if the body has one.
    #[must_use]
    pub fn assistant_text(&self) -> Option<&str> {
        self.0
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
    }

    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_body(self) -> Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(msg, json!({"role": "system", "content": "be brief"}));
    }

    #[test]
    fn test_temperature_bounds() {
        assert!(Temperature::new(0.0).is_ok());
        assert!(Temperature::new(1.0).is_ok());
        assert!(Temperature::new(-0.1).is_err());
        assert!(Temperature::new(1.1).is_err());
        assert!(Temperature::new(f64::NAN).is_err());
    }

    #[test]
    fn test_payload_shape() {
        let config = RequestConfig::new(
            None,
            Temperature::new(0.7).unwrap(),
            Some("You are a helpful assistant."),
            "Hi",
        )
        .unwrap();

        let payload = serde_json::to_value(config.payload()).unwrap();
        assert_eq!(
            payload,
            json!({
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Hi"}
                ],
                "model": "grok-2-latest",
                "stream": false,
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_model_name_is_sent_verbatim() {
        let config =
            RequestConfig::new(Some(" grok-3 "), Temperature::default(), None, "Hi").unwrap();
        assert_eq!(config.model(), " grok-3 ");

        let blank = RequestConfig::new(Some("  "), Temperature::default(), None, "Hi");
        assert!(matches!(blank, Err(ChatError::InvalidRequest(_))));
    }

    #[test]
    fn test_assistant_text_missing_choices() {
        let response = ApiResponse::new(json!({"id": "abc", "choices": []}));
        assert_eq!(response.assistant_text(), None);
    }
}
