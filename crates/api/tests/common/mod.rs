use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use neurolattice_api::config::ServerConfig;
use neurolattice_api::relay::{EmailJsClient, EmailRelayConfig};
use neurolattice_api::router::build_app_router;
use neurolattice_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no relay credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        email: EmailRelayConfig::unconfigured(),
    }
}

/// A test config whose relay is fully configured and points at `api_url`.
pub fn relay_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        email: EmailRelayConfig {
            service_id: Some("service_test".into()),
            template_id: Some("template_test".into()),
            public_key: Some("public_test".into()),
            private_key: Some("private_test".into()),
            api_url: api_url.to_string(),
        },
        ..test_config()
    }
}

/// Build the full application router through the same builder `main.rs`
/// uses, so tests exercise the production middleware stack.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        email_client: Arc::new(EmailJsClient::new().unwrap()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Mock EmailJS upstream
// ---------------------------------------------------------------------------

/// A local stand-in for the EmailJS send endpoint.
pub struct MockEmailJs {
    pub url: String,
    /// JSON bodies received, in arrival order.
    pub received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn mock_send(State(mock): State<MockState>, Json(payload): Json<Value>) -> (StatusCode, &'static str) {
    mock.received.lock().unwrap().push(payload);
    (mock.status, mock.body)
}

/// Serve a mock EmailJS endpoint on an ephemeral port that answers every
/// send with `status` and a plain-text `body`.
pub async fn spawn_mock_emailjs(status: StatusCode, body: &'static str) -> MockEmailJs {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/v1.0/email/send", post(mock_send))
        .with_state(MockState {
            status,
            body,
            received: Arc::clone(&received),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockEmailJs {
        url: format!("http://{addr}/api/v1.0/email/send"),
        received,
    }
}

/// A URL on a local port with nothing listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1.0/email/send")
}
