//! Domain error types
//!
//! These errors are framework-agnostic and represent failures of the
//! text-generation capability. HTTP mapping lives in the api layer.

use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    /// Provider could not be built (missing key, unknown provider name)
    Config(String),
    /// Network failure, timeout, TLS error
    Transport(String),
    /// Provider answered with a non-success status
    Status { status: u16, body: String },
    /// Provider answered 2xx but the body had no usable text
    Malformed(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "Provider configuration error: {}", msg),
            ProviderError::Transport(msg) => write!(f, "Provider transport error: {}", msg),
            ProviderError::Status { status, body } => {
                write!(f, "Provider returned HTTP {}: {}", status, body)
            }
            ProviderError::Malformed(msg) => write!(f, "Malformed provider response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

// Conversion from reqwest errors (used in the providers layer)
impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::Malformed(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
