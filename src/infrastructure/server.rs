// Server module - router assembly and port selection
// Used by main.rs and the router tests

use axum::Router;
use axum::http::HeaderValue;
use std::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::infrastructure::AppState;

/// Build the full application: API routes, docs, static landing page
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router_with_state(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Unparseable origins are logged and skipped. No origins means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    layer.allow_origin(allowed)
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Find an available port starting from the preferred port (0.0.0.0)
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    find_available_port_on_ip(preferred_port, "0.0.0.0")
}
