//! Contact-form relay to EmailJS.
//!
//! The browser never sees the EmailJS private key: the contact page posts
//! the inquiry here and [`EmailJsClient`] forwards it to the EmailJS REST
//! API with the server-held credentials. One attempt per inquiry, no retry.
//!
//! Responses keep the flat shape the contact page reads (`{success}` or
//! `{error, debug?}`) rather than the `{error, code}` envelope of
//! [`crate::error::AppError`].

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use neurolattice_core::contact::TemplateParams;
use serde::Serialize;
use serde_json::json;

/// Default EmailJS send endpoint.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// HTTP request timeout for a single relay attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";

/// Names the browser build used for the non-secret settings. Read when the
/// server-side name is unset so an existing `.env` keeps working.
const LEGACY_SERVICE_ID_VAR: &str = "VITE_EMAILJS_SERVICE_ID";
const LEGACY_TEMPLATE_ID_VAR: &str = "VITE_EMAILJS_TEMPLATE_ID";
const LEGACY_PUBLIC_KEY_VAR: &str = "VITE_EMAILJS_PUBLIC_KEY";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure modes of `POST /api/send-email`.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Anything other than `POST` on the relay route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// One or more credentials are unset; holds the variable names.
    #[error("Missing backend configuration")]
    MissingConfiguration(Vec<&'static str>),

    /// EmailJS answered with a non-2xx status.
    #[error("EmailJS Error: {body}")]
    Upstream { status: u16, body: String },

    /// The request never got a response (network, DNS, timeout, etc.).
    #[error("Internal Server Error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            RelayError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, axum::Json(json!({ "error": message })))
                    .into_response()
            }
            RelayError::MissingConfiguration(missing) => {
                tracing::error!(missing = ?missing, "Email relay is not configured");
                let body = json!({
                    "error": message,
                    "debug": format!("Missing: {}", missing.join(", ")),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
            RelayError::Upstream { status, body } => {
                tracing::warn!(status, body = %body, "EmailJS rejected inquiry");
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, axum::Json(json!({ "error": message }))).into_response()
            }
            RelayError::Transport(err) => {
                tracing::error!(error = %err, "EmailJS request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(json!({ "error": message })))
                    .into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// EmailJS settings. Credentials are optional at startup and checked per
/// request, so a misconfigured relay never stops the calculator from serving.
#[derive(Debug, Clone)]
pub struct EmailRelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub api_url: String,
}

/// A complete set of credentials, borrowed from [`EmailRelayConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RelayCredentials<'a> {
    pub api_url: &'a str,
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
    pub private_key: &'a str,
}

impl EmailRelayConfig {
    /// Load relay settings from environment variables.
    ///
    /// | Env Var               | Fallback                   | Default                                       |
    /// |-----------------------|----------------------------|-----------------------------------------------|
    /// | `EMAILJS_SERVICE_ID`  | `VITE_EMAILJS_SERVICE_ID`  | unset                                         |
    /// | `EMAILJS_TEMPLATE_ID` | `VITE_EMAILJS_TEMPLATE_ID` | unset                                         |
    /// | `EMAILJS_PUBLIC_KEY`  | `VITE_EMAILJS_PUBLIC_KEY`  | unset                                         |
    /// | `EMAILJS_PRIVATE_KEY` |                            | unset                                         |
    /// | `EMAILJS_API_URL`     |                            | `https://api.emailjs.com/api/v1.0/email/send` |
    ///
    /// Empty values count as unset. Missing credentials are always reported
    /// under the `EMAILJS_*` names.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            service_id: var(SERVICE_ID_VAR).or_else(|| var(LEGACY_SERVICE_ID_VAR)),
            template_id: var(TEMPLATE_ID_VAR).or_else(|| var(LEGACY_TEMPLATE_ID_VAR)),
            public_key: var(PUBLIC_KEY_VAR).or_else(|| var(LEGACY_PUBLIC_KEY_VAR)),
            private_key: var(PRIVATE_KEY_VAR),
            api_url: var("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.into()),
        }
    }

    /// Settings with every credential unset.
    pub fn unconfigured() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            private_key: None,
            api_url: DEFAULT_EMAILJS_API_URL.into(),
        }
    }

    /// All four credentials, or the names of the ones that are missing.
    pub fn credentials(&self) -> Result<RelayCredentials<'_>, RelayError> {
        let fields = [
            (SERVICE_ID_VAR, present(&self.service_id)),
            (TEMPLATE_ID_VAR, present(&self.template_id)),
            (PUBLIC_KEY_VAR, present(&self.public_key)),
            (PRIVATE_KEY_VAR, present(&self.private_key)),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        match fields.map(|(_, value)| value) {
            [Some(service_id), Some(template_id), Some(public_key), Some(private_key)] => {
                Ok(RelayCredentials {
                    api_url: &self.api_url,
                    service_id,
                    template_id,
                    public_key,
                    private_key,
                })
            }
            _ => Err(RelayError::MissingConfiguration(missing)),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Body of the EmailJS `email/send` call.
#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken")]
    access_token: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends inquiries to EmailJS.
pub struct EmailJsClient {
    client: reqwest::Client,
}

impl EmailJsClient {
    /// Create a client with the relay request timeout applied.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Deliver one inquiry. Any 2xx counts as sent.
    pub async fn send(
        &self,
        credentials: &RelayCredentials<'_>,
        params: &TemplateParams,
    ) -> Result<(), RelayError> {
        let payload = SendPayload {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            access_token: credentials.private_key,
            template_params: params,
        };

        let response = self
            .client
            .post(credentials.api_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
