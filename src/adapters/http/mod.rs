//! HTTP adapters - REST API implementations.

pub mod chat;
pub mod middleware;

pub use chat::{chat_routes, ChatHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assembles the application router.
///
/// Chat routes are mounted under `/api/chat` behind the auth middleware;
/// tracing, CORS, and a request timeout apply to everything.
pub fn app_router(
    handlers: ChatHandlers,
    auth: AuthState,
    cors_origins: &[String],
    request_timeout: Duration,
) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .nest("/api/chat", chat_routes(handlers))
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
}
