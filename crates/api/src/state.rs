use std::sync::Arc;

use crate::config::ServerConfig;
use crate::relay::EmailJsClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the relay credentials.
    pub config: Arc<ServerConfig>,
    /// Outbound EmailJS client (one pooled `reqwest::Client`).
    pub email_client: Arc<EmailJsClient>,
}
