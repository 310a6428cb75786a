/// LLM Client — the single point of entry for all OpenAI API calls in the tagger.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// Both chat completion (tag generation) and embeddings (vector search)
/// MUST go through this module.
///
/// Generation is single-shot: one request per inference, no retry.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::Config;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
const HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The text-generation capability consumed by the inference pipeline.
///
/// `Ok(None)` means the engine answered but produced nothing usable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The single OpenAI client shared by generation and embedding.
///
/// The underlying HTTP client is created at most once, on first use. A
/// missing API key fails that first use with `LlmError::MissingApiKey`.
pub struct LlmClient {
    http: OnceCell<Client>,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    embedding_model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: OnceCell::new(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model_name.clone(),
            temperature: config.openai_temperature,
            embedding_model: config.openai_embedding_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)
    }

    async fn http(&self) -> Result<&Client, LlmError> {
        self.api_key()?;
        self.http
            .get_or_try_init(|| async {
                info!("Initializing OpenAI client (model: {})", self.model);
                Client::builder()
                    .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
                    .build()
                    .map_err(LlmError::Http)
            })
            .await
    }

    /// Sends a single user message to the chat completions endpoint.
    pub async fn call(&self, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "LLM prompt preview: {}...",
            prompt.chars().take(300).collect::<String>()
        );

        let response = self
            .http()
            .await?
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(self.api_key()?)
            .json(&request_body)
            .send()
            .await?;

        let chat_response: ChatResponse = parse_response(response).await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Embeds a query string for similarity search.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let request_body = EmbeddingRequest {
            model: &self.embedding_model,
            input: text,
        };

        let response = self
            .http()
            .await?
            .post(EMBEDDINGS_URL)
            .bearer_auth(self.api_key()?)
            .json(&request_body)
            .send()
            .await?;

        let embedding_response: EmbeddingResponse = parse_response(response).await?;

        embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        let response = self.call(prompt).await?;
        Ok(response.text().map(str::to_string))
    }
}

/// Turns a non-success status into `LlmError::Api`, otherwise decodes the body.
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, LlmError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<OpenAiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(LlmError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            openai_api_key: None,
            openai_model_name: "gpt-4o".to_string(),
            openai_temperature: 0.0,
            openai_embedding_model: "text-embedding-3-small".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_chat_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "- 리더십 (CTO)"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("- 리더십 (CTO)"));
    }

    #[test]
    fn test_chat_response_text_none_for_null_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_chat_response_text_none_without_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_on_first_use() {
        let client = LlmClient::new(&config_without_key());
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_blank_api_key_is_treated_as_missing() {
        let mut config = config_without_key();
        config.openai_api_key = Some(String::new());
        let client = LlmClient::new(&config);
        let err = client.embed("서울대학교").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
