//! Handlers for the contact-form relay.

use axum::extract::State;
use axum::Json;
use neurolattice_core::contact::ContactInquiry;
use serde::Serialize;

use crate::relay::RelayError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
}

/// POST /api/send-email
///
/// Forwards the inquiry to EmailJS using the server-held credentials.
pub async fn send_email(
    State(state): State<AppState>,
    Json(inquiry): Json<ContactInquiry>,
) -> Result<Json<SendEmailResponse>, RelayError> {
    let credentials = state.config.email.credentials()?;
    let params = inquiry.template_params();

    state.email_client.send(&credentials, &params).await?;

    tracing::info!(title = %params.title, "Contact inquiry relayed");
    Ok(Json(SendEmailResponse { success: true }))
}

/// Any non-POST method on the relay route.
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
