use axum::routing::post;
use axum::Router;

use crate::handlers::traffic;
use crate::state::AppState;

/// Routes mounted at `/traffic`.
///
/// ```text
/// POST /convert   -> convert_traffic
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/convert", post(traffic::convert_traffic))
}
