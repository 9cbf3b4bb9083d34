use std::env;

/// Environment variable holding the xAI bearer token.
pub const API_KEY_ENV: &str = "XAI_API_KEY";

/// Environment variable overriding the default model name.
pub const MODEL_ENV: &str = "XAI_MODEL";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub xai_api_key: Option<String>,
    pub xai_model: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            xai_api_key: non_blank(API_KEY_ENV),
            xai_model: non_blank(MODEL_ENV),
        }
    }
}
