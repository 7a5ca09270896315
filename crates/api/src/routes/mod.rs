pub mod contact;
pub mod health;
pub mod savings;
pub mod traffic;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /catalog                 hardware + deployment catalogs (GET)
/// /savings                 savings metrics, cards, breakdown (POST)
/// /savings/report          executive report PDF (POST)
/// /traffic/convert         unit toggle conversion (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::catalog::get_catalog))
        .nest("/savings", savings::router())
        .nest("/traffic", traffic::router())
}
