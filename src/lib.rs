pub mod config;
pub mod generator;
pub mod llm;
pub mod script;

pub use config::Config;
pub use script::ScriptResponse;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode script response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to write script to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptgenError>;
