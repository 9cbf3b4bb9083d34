/// grok-chat - a form-style client for the xAI Grok chat-completion endpoint.
///
/// Each submission sends one system/user message pair to
/// `https://api.x.ai/v1/chat/completions` and shows either the assistant's
/// reply (with the full JSON body available) or a single error line.
///
/// # Architecture
///
/// - `core` holds the data model, the credential and environment config
/// - `ai` holds the `ChatRequestHandler` that performs the HTTP call
/// - `form` and `views` are the input and output sides of the form
/// - reqwest for HTTP, tracing for structured logs
///
/// # Example
///
/// ```no_run
/// use grok_chat::ai::ChatRequestHandler;
/// use grok_chat::core::config::AppConfig;
/// use grok_chat::form::ChatForm;
/// use grok_chat::views::ChatView;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     grok_chat::setup_logging();
///
///     let config = AppConfig::from_env();
///     let handler = ChatRequestHandler::new()?;
///     let form = ChatForm {
///         user_message: "What is the capital of France?".to_string(),
///         temperature: 0.2,
///         ..ChatForm::default()
///     };
///
///     match form.submit(&handler, &config).await {
///         ChatView::Reply { assistant_text, .. } => {
///             println!("{}", assistant_text.unwrap_or_default());
///         }
///         ChatView::Error(message) => eprintln!("{message}"),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod form;
pub mod prompt;
pub mod views;

/// Configure structured logging with JSON format.
///
/// Logs go to stderr so stdout only carries chat output. The level comes from
/// `RUST_LOG` and defaults to `info`. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// grok_chat::setup_logging();
/// ```
pub fn setup_logging() {
    setup_logging_with_default("info");
}

/// Same as [`setup_logging`] with a caller-chosen fallback when `RUST_LOG` is unset.
pub fn setup_logging_with_default(default_level: &str) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
