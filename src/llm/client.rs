use crate::config::LlmConfig;
use crate::ScriptgenError;

use super::providers::openai::OpenAiClient;
use super::schema::ResponseSchema;

/// Trait for LLM clients
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one user prompt and return the raw text of the reply, which the
    /// provider is asked to make conform to `schema`.
    async fn complete(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, ScriptgenError>;
}

/// Create an LLM client based on configuration
pub fn create_client(config: &LlmConfig) -> Result<Box<dyn LlmClient>, ScriptgenError> {
    match config.provider.as_str() {
        "openai" => {
            let api_key = std::env::var(&config.api_key_env).map_err(|_| {
                ScriptgenError::Config(format!(
                    "API key not found in environment variable: {}",
                    config.api_key_env
                ))
            })?;

            Ok(Box::new(OpenAiClient::new(
                api_key,
                config.model.clone(),
                config.base_url.clone(),
            )))
        }
        provider => Err(ScriptgenError::Config(format!(
            "Unsupported LLM provider: {}",
            provider
        ))),
    }
}
