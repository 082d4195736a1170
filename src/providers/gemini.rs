use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::domain::{ProviderError, TextGenerator};

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Generative-content adapter: one concatenated prompt, no token ceiling.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: Secret<String>,
    endpoint: String,
}

impl GeminiGenerator {
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ProviderError::Config("GEMINI_API_KEY is not set".to_string()))?;

        Ok(Self {
            client: super::http_client(timeout)?,
            api_key,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
        })
    }
}

/// The API has no system role here, so the instruction leads the user text.
fn combine_prompt(system_prompt: &str, user_text: &str) -> String {
    format!("{}\n\nUser: {}", system_prompt, user_text)
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(combine_prompt(system_prompt, user_text)),
                }],
            }],
        };

        let req = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body);

        let parsed: GenerateContentResponse = super::send_json(req).await?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::Malformed(
                "response has no candidate text".to_string(),
            ));
        }
        Ok(text)
    }
}
