use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact relay, mounted at the root.
///
/// ```text
/// POST  /api/send-email   -> send_email
/// *     /api/send-email   -> 405 method_not_allowed
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/send-email",
        post(contact::send_email).fallback(contact::method_not_allowed),
    )
}
