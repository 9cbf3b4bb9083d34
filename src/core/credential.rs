use secrecy::{ExposeSecret, SecretString};

use super::config::{API_KEY_ENV, AppConfig};
use crate::errors::ChatError;

/// Bearer token for the chat-completion endpoint.
///
/// Lives only for the duration of a request. `Debug` never prints the value.
#[derive(Debug)]
pub struct Credential(SecretString);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Picks the explicit value when it is non-blank, otherwise whatever
    /// `XAI_API_KEY` held when `config` was read. The chosen value is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::MissingCredential` if neither source has a value.
    pub fn resolve(explicit: Option<&str>, config: &AppConfig) -> Result<Self, ChatError> {
        let non_blank = |s: &&str| !s.trim().is_empty();
        explicit
            .filter(non_blank)
            .or_else(|| config.xai_api_key.as_deref().filter(non_blank))
            .map(Self::new)
            .ok_or_else(|| {
                ChatError::MissingCredential(format!(
                    "provide an API key or set the {API_KEY_ENV} environment variable"
                ))
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}
