//! Shared response envelope types for API handlers.
//!
//! Calculator responses use a `{ "data": ... }` envelope. The contact relay
//! keeps its own flat shape (see [`crate::relay`]).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: catalog }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
