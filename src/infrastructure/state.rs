//! Application state containing the shared text generator

use std::sync::Arc;

use crate::domain::TextGenerator;

/// Application state shared across all handlers.
/// Built once at start-up and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Text generation provider
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}
