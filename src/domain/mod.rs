//! Domain layer - Pure abstractions
//!
//! This layer contains NO framework dependencies (no Axum).
//! Only the generator trait and domain error types.

pub mod errors;
pub mod generator;

pub use errors::ProviderError;
pub use generator::{SYSTEM_PROMPT, TextGenerator};
