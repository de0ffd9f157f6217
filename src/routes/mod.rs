//! HTTP route handlers.
//!
//! `GET /` serves the greeting, `GET /healthz` the liveness probe, and
//! `GET /v3/api-docs` the OpenAPI document when enabled. Every response is
//! marked `no-store`: greetings echo the caller identity and probe answers
//! must always be fresh.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod api_docs;
pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{API_DOCS_PATH, CACHE_CONTROL_NO_STORE};
use crate::error;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and headers.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(greeting::index))
        .route("/healthz", get(health::health));

    if state.config.api_docs.enabled {
        router = router.route(API_DOCS_PATH, get(api_docs::document));
    }

    router
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
