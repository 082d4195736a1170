use secrecy::Secret;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_MAX_TOKENS: u32 = 150;
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Which text-generation backend serves `/process-voice`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("unknown LLM_PROVIDER '{}'", other)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Raw `LLM_PROVIDER` value, parsed when the generator is built
    pub provider: String,
    pub openai: OpenAiConfig,
    pub gemini: GeminiConfig,
    pub timeout_secs: u64,
    pub session_secret: Option<Secret<String>>,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            openai: OpenAiConfig {
                api_key: secret_var("OPENAI_API_KEY"),
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
                max_tokens: env::var("OPENAI_MAX_TOKENS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_OPENAI_MAX_TOKENS),
            },
            gemini: GeminiConfig {
                api_key: secret_var("GEMINI_API_KEY"),
                base_url: env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            },
            timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            session_secret: secret_var("SESSION_SECRET"),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }

    pub fn provider_kind(&self) -> Result<ProviderKind, String> {
        self.provider.parse()
    }
}

/// Empty values count as unset
fn secret_var(name: &str) -> Option<Secret<String>> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .map(Secret::new)
}
