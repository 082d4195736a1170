//! Provider adapters for the `TextGenerator` trait
//!
//! - `openai`: chat-completion API (system/user messages, token ceiling)
//! - `gemini`: generative-content API (single concatenated prompt)

pub mod gemini;
pub mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiChatGenerator;

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, ProviderKind};
use crate::domain::{ProviderError, TextGenerator};

const USER_AGENT: &str = concat!("voice-assistant/", env!("CARGO_PKG_VERSION"));

/// Build the generator selected by `LLM_PROVIDER`. Called once at start-up.
pub fn from_config(config: &Config) -> Result<Arc<dyn TextGenerator>, ProviderError> {
    let kind = config.provider_kind().map_err(ProviderError::Config)?;
    let timeout = Duration::from_secs(config.timeout_secs);

    let generator: Arc<dyn TextGenerator> = match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiChatGenerator::new(&config.openai, timeout)?),
        ProviderKind::Gemini => Arc::new(GeminiGenerator::new(&config.gemini, timeout)?),
    };

    tracing::info!("Text generation provider: {}", generator.name());
    Ok(generator)
}

fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Config(format!("Failed to build client: {}", e)))
}

/// Send a request and decode a 2xx JSON body.
async fn send_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ProviderError> {
    let resp = req.send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))
}
