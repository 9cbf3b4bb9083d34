//! All LLM endpoint functionality

pub mod client;

// Re-export main types for convenience
pub use client::{ChatRequestHandler, XAI_CHAT_COMPLETIONS_URL};
