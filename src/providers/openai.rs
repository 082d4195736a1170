use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::OpenAiConfig;
use crate::domain::{ProviderError, TextGenerator};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Chat-completion adapter: separate system role, token ceiling.
pub struct OpenAiChatGenerator {
    client: reqwest::Client,
    api_key: Secret<String>,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiChatGenerator {
    pub fn new(config: &OpenAiConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ProviderError::Config("OPENAI_API_KEY is not set".to_string()))?;

        Ok(Self {
            client: super::http_client(timeout)?,
            api_key,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatGenerator {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            max_tokens: self.max_tokens,
        };

        let req = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body);

        let parsed: ChatCompletionResponse = super::send_json(req).await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProviderError::Malformed("completion has no message content".into()))
    }
}
