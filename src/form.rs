//! Input side of the chat form.
//!
//! Turns the raw field values into a `RequestConfig` plus `Credential` and
//! drives one submission through the handler.

use tracing::info;

use crate::ai::ChatRequestHandler;
use crate::core::config::AppConfig;
use crate::core::credential::Credential;
use crate::core::models::{RequestConfig, Temperature};
use crate::errors::ChatError;
use crate::prompt::DEFAULT_SYSTEM_MESSAGE;
use crate::views::ChatView;

/// Raw values as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatForm {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub system_message: String,
    pub user_message: String,
    pub temperature: f64,
}

impl Default for ChatForm {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            user_message: String::new(),
            temperature: 0.0,
        }
    }
}

impl ChatForm {
    /// Submission stays disabled until there is something to send.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.user_message.is_empty()
    }

    /// Resolves the credential first so a missing key never reaches the network.
    ///
    /// The model falls back to `XAI_MODEL`, then to the built-in default.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` or `InvalidRequest` for unusable input.
    pub fn build_request(
        &self,
        config: &AppConfig,
    ) -> Result<(RequestConfig, Credential), ChatError> {
        let credential = Credential::resolve(self.api_key.as_deref(), config)?;
        let temperature = Temperature::new(self.temperature)?;
        let model = self.model.as_deref().or(config.xai_model.as_deref());

        let request = RequestConfig::new(
            model,
            temperature,
            Some(self.system_message.as_str()),
            &self.user_message,
        )?;

        Ok((request, credential))
    }

    /// Runs one request/response round trip and converts the outcome for display.
    pub async fn submit(&self, handler: &ChatRequestHandler, config: &AppConfig) -> ChatView {
        let result = match self.build_request(config) {
            Ok((request, credential)) => handler.send(&request, &credential).await,
            Err(e) => Err(e),
        };

        if let Err(ref e) = result {
            info!("Chat submission failed: {e}");
        }

        ChatView::from_result(result)
    }
}
