//! xAI chat-completion client
//!
//! One `POST /v1/chat/completions` per call. No retries, no streaming.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::credential::Credential;
use crate::core::models::{ApiResponse, RequestConfig};
use crate::errors::ChatError;

pub const XAI_CHAT_COMPLETIONS_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Sends a single chat-completion request and hands back the raw JSON body.
#[derive(Debug, Clone)]
pub struct ChatRequestHandler {
    http: Client,
    endpoint: String,
}

impl ChatRequestHandler {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ChatError> {
        Self::with_endpoint(XAI_CHAT_COMPLETIONS_URL)
    }

    /// Handler that posts to `endpoint` instead of the xAI URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, ChatError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ChatError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// # Errors
    ///
    /// - `MissingCredential` if `credential` is blank; nothing is sent.
    /// - `Transport` if no response was received.
    /// - `Api` if the endpoint answered with a non-2xx status.
    /// - `InvalidResponse` if a 2xx body is not JSON.
    pub async fn send(
        &self,
        config: &RequestConfig,
        credential: &Credential,
    ) -> Result<ApiResponse, ChatError> {
        if credential.is_empty() {
            return Err(ChatError::MissingCredential(
                "API key must not be empty".to_string(),
            ));
        }

        #[cfg(feature = "debug-logs")]
        tracing::debug!("Chat completion messages:\n{:?}", config.messages());

        info!(
            model = config.model(),
            messages = config.messages().len(),
            temperature = config.temperature().value(),
            "Sending chat completion request"
        );

        let headers = request_headers(credential)?;

        let response = self
            .http
            .post(&self.endpoint)
            .headers(headers)
            .json(&config.payload())
            .send()
            .await
            .map_err(|e| {
                warn!("Chat completion request failed before a response: {e}");
                ChatError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let http_error = response
                .error_for_status_ref()
                .err()
                .map_or_else(|| format!("HTTP status {status}"), |e| e.to_string());
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!(status = status.as_u16(), "Chat completion request rejected");

            return Err(match serde_json::from_str::<Value>(&body) {
                Ok(detail) => ChatError::api_json(&detail),
                Err(_) => ChatError::api_text(&http_error, &body),
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            ChatError::InvalidResponse(format!(
                "Failed to parse chat completion response: {e}\nResponse: {body}"
            ))
        })?;

        info!(status = status.as_u16(), "Chat completion request succeeded");
        Ok(ApiResponse::new(json))
    }
}

fn request_headers(credential: &Credential) -> Result<HeaderMap, ChatError> {
    let mut headers = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(&credential.bearer_header()).map_err(|e| {
        ChatError::InvalidRequest(format!("Invalid Authorization header: {e}"))
    })?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Temperature;

    #[test]
    fn test_request_headers_marks_authorization_sensitive() {
        let headers = request_headers(&Credential::new("xai-test")).unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth.to_str().unwrap(), "Bearer xai-test");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_request_headers_rejects_control_characters() {
        let err = request_headers(&Credential::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, ChatError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_send_blank_credential_fails_before_network() {
        // Port 9 (discard) is never contacted because the credential check runs first.
        let handler = ChatRequestHandler::with_endpoint("http://127.0.0.1:9/v1/chat/completions")
            .unwrap();
        let config =
            RequestConfig::new(None, Temperature::default(), None, "hello").unwrap();

        let err = handler
            .send(&config, &Credential::new("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::MissingCredential(_)));
    }

    #[test]
    fn test_default_endpoint() {
        let handler = ChatRequestHandler::new().unwrap();
        assert_eq!(handler.endpoint(), XAI_CHAT_COMPLETIONS_URL);
    }
}
