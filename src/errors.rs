use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// The endpoint answered with a non-2xx status.
    #[error("API Error: {0}")]
    Api(String),

    #[error("Request Error: {0}")]
    Transport(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request Error: {0}")]
    InvalidResponse(String),
}

impl ChatError {
    /// Builds the error for a non-2xx reply from the parsed JSON body.
    #[must_use]
    pub fn api_json(detail: &serde_json::Value) -> Self {
        let pretty = serde_json::to_string_pretty(detail).unwrap_or_else(|_| detail.to_string());
        ChatError::Api(pretty)
    }

    /// Builds the error for a non-2xx reply whose body is not JSON.
    #[must_use]
    pub fn api_text(http_error: &str, body: &str) -> Self {
        ChatError::Api(format!("{http_error}\nResponse: {body}"))
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(error: reqwest::Error) -> Self {
        ChatError::Transport(error.to_string())
    }
}
