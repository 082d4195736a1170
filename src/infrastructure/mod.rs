//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Application state (state)

pub mod config;
pub mod server;
pub mod state;

pub use state::AppState;
