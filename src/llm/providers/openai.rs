use crate::llm::client::LlmClient;
use crate::llm::schema::ResponseSchema;
use crate::ScriptgenError;
use serde::{Deserialize, Serialize};

/// Client for OpenAI's chat-completions API, or any server that speaks it
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, prompt: &str, schema: &'a ResponseSchema) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
                refusal: None,
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: schema,
            },
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: &'a ResponseSchema,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

/// Pull the text of the first choice out of a chat-completions reply
fn first_message_content(response: ChatResponse) -> Result<String, ScriptgenError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message)
        .ok_or_else(|| ScriptgenError::Llm("Empty response from API".to_string()))?;

    if let Some(refusal) = message.refusal {
        return Err(ScriptgenError::Llm(format!("Model refused the request: {}", refusal)));
    }

    message
        .content
        .ok_or_else(|| ScriptgenError::Llm("Response message has no content".to_string()))
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, ScriptgenError> {
        let request = self.build_request(prompt, schema);

        tracing::debug!("Requesting completion from {} with model {}", self.base_url, self.model);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScriptgenError::Llm(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatResponse = response.json().await?;
        first_message_content(api_response)
    }
}
