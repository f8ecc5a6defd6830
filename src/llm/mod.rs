mod client;
pub mod prompt;
pub mod providers;
pub mod schema;

pub use client::{create_client, LlmClient};
#[cfg(test)]
pub use client::MockLlmClient;
pub use schema::{script_response_schema, ResponseSchema};
