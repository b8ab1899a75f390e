//! HTTP route handlers and the route table.
//!
//! Routes are registered explicitly with per-route Cache-Control headers:
//! the API endpoints embed a per-call timestamp and are never cacheable,
//! while the static text routes take a short public cache.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request.

pub mod about;
pub mod health;
pub mod hello;
pub mod info;

use axum::{http::StatusCode, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_API, CACHE_CONTROL_STATIC_TEXT};
use crate::middleware::request_id_layer;

/// Fallback handler for unmatched requests.
///
/// Also attached per method router so a wrong-method request to a known path
/// gets 404 rather than the default 405; unknown requests are all alike here.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Creates the axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // API endpoints - timestamp changes per call, never cache
    let api_routes = Router::new()
        .route("/api/hello", get(hello::hello).fallback(not_found))
        .route("/api/info", get(info::info).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ));

    // Static description text - short public cache
    let about_routes = Router::new()
        .route("/get", get(about::about).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC_TEXT),
        ));

    // Health check - always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health).fallback(not_found))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ));

    Router::new()
        .merge(api_routes)
        .merge(about_routes)
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span for log correlation
        .layer(middleware::from_fn(request_id_layer))
}
