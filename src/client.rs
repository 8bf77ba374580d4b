// src/client.rs
use crate::error::SignupError;
use crate::models::SignupRequest;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

/// Sends one signup request and reports the response status.
///
/// Only the status is consumed; response bodies are never read.
#[allow(async_fn_in_trait)]
pub trait SignupClient {
    async fn send(&self, request: &SignupRequest) -> Result<StatusCode, SignupError>;
}

#[derive(Debug, Clone)]
pub struct HttpSignupClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSignupClient {
    /// `endpoint_path` is resolved against `base_url`, so `/api/signup` on
    /// `http://host:8000/app/` targets `http://host:8000/api/signup`.
    pub fn new(base_url: &str, endpoint_path: &str) -> Result<Self, SignupError> {
        let endpoint = Url::parse(base_url)?.join(endpoint_path)?;

        // No timeout: a submit waits for as long as the server takes
        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SignupClient for HttpSignupClient {
    async fn send(&self, request: &SignupRequest) -> Result<StatusCode, SignupError> {
        let body = serde_json::to_vec(request)?;

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending signup request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::SignupFormController;
    use crate::dom::{MemoryField, MemoryPanel, MemorySubmitEvent, Panel};
    use crate::models::SubmitOutcome;
    use axum::{extract::State, http::HeaderMap, routing::post, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct CapturedRequest {
        content_type: Option<String>,
        body: String,
    }

    type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

    async fn record_signup(
        State((captured, status)): State<(Captured, u16)>,
        headers: HeaderMap,
        body: String,
    ) -> axum::http::StatusCode {
        let content_type = headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        captured
            .lock()
            .unwrap()
            .push(CapturedRequest { content_type, body });

        axum::http::StatusCode::from_u16(status).unwrap()
    }

    /// Serves `POST /api/signup` on an ephemeral port, answering every
    /// request with `status`.
    async fn spawn_signup_endpoint(status: u16) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/api/signup", post(record_signup))
            .with_state((captured.clone(), status));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = HttpSignupClient::new("http://localhost:8000/app/", "/api/signup").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8000/api/signup");

        let client = HttpSignupClient::new("http://localhost:8000", "api/signup").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8000/api/signup");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpSignupClient::new("not a url", "/api/signup").unwrap_err();
        assert!(matches!(err, SignupError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let (base_url, captured) = spawn_signup_endpoint(200).await;
        let client = HttpSignupClient::new(&base_url, "/api/signup").unwrap();

        let status = client
            .send(&SignupRequest::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(
            captured[0].body,
            r#"{"FirstName":"Ada","LastName":"Lovelace","Email":"ada@example.com"}"#
        );
    }

    #[tokio::test]
    async fn test_send_reports_error_status() {
        let (base_url, _captured) = spawn_signup_endpoint(400).await;
        let client = HttpSignupClient::new(&base_url, "/api/signup").unwrap();

        let status = client.send(&SignupRequest::new("", "", "")).await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_send_unreachable_server() {
        // Grab a free port, then close it again
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpSignupClient::new(&format!("http://{}", addr), "/api/signup").unwrap();
        let err = client
            .send(&SignupRequest::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, SignupError::Network(_)));
    }

    #[tokio::test]
    async fn test_form_round_trip_against_endpoint() {
        let (base_url, captured) = spawn_signup_endpoint(201).await;
        let client = HttpSignupClient::new(&base_url, "/api/signup").unwrap();

        let first_name = MemoryField::new("Ada");
        let last_name = MemoryField::new("Lovelace");
        let email = MemoryField::new("ada@example.com");
        let popup = MemoryPanel::new();
        let controller =
            SignupFormController::new(client, &first_name, &last_name, &email, &popup);

        let event = MemorySubmitEvent::new();
        let outcome = controller.on_submit(&event).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Confirmed(StatusCode::CREATED));
        assert!(event.default_prevented());
        assert!(popup.is_visible());
        assert_eq!(captured.lock().unwrap().len(), 1);

        controller.on_close_popup();
        assert!(!popup.is_visible());
    }
}
