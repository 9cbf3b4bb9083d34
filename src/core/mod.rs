pub mod config;
pub mod credential;
pub mod models;
