use axum::routing::post;
use axum::Router;

use crate::handlers::savings;
use crate::state::AppState;

/// Routes mounted at `/savings`.
///
/// ```text
/// POST /          -> calculate_savings
/// POST /report    -> download_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(savings::calculate_savings))
        .route("/report", post(savings::download_report))
}
