//! Text generation contract
//!
//! The handler only knows this trait. Concrete adapters live in
//! `crate::providers`.

use async_trait::async_trait;

use super::ProviderError;

/// Instruction sent ahead of every user query.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful voice assistant. Keep responses concise and natural.";

/// Capability: given a system instruction and user text, return generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider identifier, used in logs and the health check
    fn name(&self) -> &'static str;

    /// Single unary call to the provider. No retries.
    async fn generate(&self, system_prompt: &str, user_text: &str)
        -> Result<String, ProviderError>;
}
