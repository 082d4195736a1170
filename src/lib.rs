pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod providers;

pub use infrastructure::config;
pub use infrastructure::server;
