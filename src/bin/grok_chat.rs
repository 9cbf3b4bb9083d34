use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use grok_chat::ai::ChatRequestHandler;
use grok_chat::core::config::AppConfig;
use grok_chat::form::ChatForm;
use grok_chat::prompt::DEFAULT_SYSTEM_MESSAGE;
use grok_chat::views::{ChatView, full_response_text};

const USAGE: &str = "\
Usage:
  1. Pass your xAI API key with --api-key or set XAI_API_KEY
  2. Optionally change the system message with --system (an empty string drops it)
  3. Give your message with --message, or type one message per line on stdin
  4. Adjust --temperature if desired (0 for focused answers, higher for more creative ones)

Your API key is never stored and is only used for the current request.";

#[derive(Parser)]
#[command(name = "grok-chat")]
#[command(version, about = "Send a message to xAI Grok and print the reply", after_long_help = USAGE)]
struct Cli {
    /// xAI API key. Falls back to XAI_API_KEY.
    #[arg(long)]
    api_key: Option<String>,

    /// Model name. Falls back to XAI_MODEL, then grok-2-latest.
    #[arg(short, long)]
    model: Option<String>,

    /// Sets the behavior of the assistant.
    #[arg(short, long, default_value = DEFAULT_SYSTEM_MESSAGE)]
    system: String,

    /// Higher values make the output more random, lower values more focused.
    #[arg(short, long, default_value_t = 0.0)]
    temperature: f64,

    /// Message to send. Without it, each stdin line is sent as its own request.
    #[arg(long)]
    message: Option<String>,

    /// Also print the full JSON response.
    #[arg(long)]
    show_response: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    grok_chat::setup_logging_with_default(if cli.verbose { "debug" } else { "warn" });

    let config = AppConfig::from_env();
    let handler = ChatRequestHandler::new()?;
    let form = ChatForm {
        api_key: cli.api_key,
        model: cli.model,
        system_message: cli.system,
        user_message: String::new(),
        temperature: cli.temperature,
    };

    if let Some(message) = cli.message {
        let form = ChatForm {
            user_message: message,
            ..form
        };
        if !form.can_submit() {
            anyhow::bail!("message must not be empty");
        }
        let view = form.submit(&handler, &config).await;
        print_view(&view, cli.show_response);
        return Ok(if view.is_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let submission = ChatForm {
            user_message: line,
            ..form.clone()
        };
        if !submission.can_submit() {
            debug!("Skipping empty message");
            continue;
        }
        let view = submission.submit(&handler, &config).await;
        print_view(&view, cli.show_response);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_view(view: &ChatView, show_response: bool) {
    match view {
        ChatView::Reply {
            assistant_text,
            full_response,
        } => {
            if let Some(text) = assistant_text {
                println!("{text}");
            }
            if show_response {
                print_full_response(full_response);
            }
        }
        ChatView::Error(message) => eprintln!("{message}"),
    }
}

fn print_full_response(body: &Value) {
    println!("--- Full API Response ---");
    println!("{}", full_response_text(body));
}
