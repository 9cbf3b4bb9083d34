use serde_json::Value;

use crate::core::models::ApiResponse;
use crate::errors::ChatError;

/// What the form shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatView {
    Reply {
        /// `choices[0].message.content`, when present.
        assistant_text: Option<String>,
        /// The untouched response body for the detail view.
        full_response: Value,
    },
    Error(String),
}

impl ChatView {
    #[must_use]
    pub fn from_result(result: Result<ApiResponse, ChatError>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(e) => Self::Error(error_message(&e)),
        }
    }

    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        let assistant_text = response.assistant_text().map(str::to_string);
        Self::Reply {
            assistant_text,
            full_response: response.into_body(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Single human-readable line shown for any failed submission.
#[must_use]
pub fn error_message(error: &ChatError) -> String {
    format!("Error occurred: {error}")
}

/// Pretty-printed body for the "full API response" detail view.
#[must_use]
pub fn full_response_text(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
