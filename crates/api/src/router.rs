//! The one place the HTTP surface is assembled.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so
//! the tests exercise the same routes and middleware the binary serves.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble routes and middleware into the served [`Router`].
///
/// Layers wrap from the last `.layer` call inwards, so a request meets
/// them in this order:
///
/// 1. CORS
/// 2. `x-request-id` assignment
/// 3. Request/response trace span
/// 4. `x-request-id` copied onto the response
/// 5. Deadline of `request_timeout_secs` (408 on expiry)
/// 6. Panic guard (500 instead of a dropped connection)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Liveness probe lives outside the versioned prefix.
        .merge(routes::health::router())
        // Contact relay keeps the path the contact page posts to.
        .merge(routes::contact::router())
        // Calculator API.
        .nest("/api/v1", routes::api_routes())
        // -- Middleware, innermost first --
        // Turn handler panics into a 500 response.
        .layer(CatchPanicLayer::new())
        // Abort handlers that overrun the configured deadline.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Echo the request ID back to the caller.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // One INFO span per request, closed with the response status.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Tag requests that arrive without an ID.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // Browser origin checks run before anything else.
        .layer(cors)
        // Hand config and the relay client to handlers.
        .with_state(state)
}

/// CORS policy for the calculator and contact pages.
///
/// Panics on an origin that is not a valid header value, so the server
/// refuses to start with a broken allow-list.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
