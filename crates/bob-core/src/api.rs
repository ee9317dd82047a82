//! Backend API client.
//!
//! Only one call exists: `POST /api/auth/login`. Credentials travel as query
//! parameters (the backend reads them from the query string, not a body).

use std::fmt;

use reqwest::header::ACCEPT;
use serde::Deserialize;

/// Path of the login endpoint, appended to the API base URL.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Why a login attempt did not produce a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The server answered with a non-2xx status.
    Rejected { status: u16 },
    /// The request never produced a response.
    Transport(String),
    /// A 2xx response whose body had no usable `access_token`.
    Decode(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Rejected { status } => write!(f, "login rejected with status {status}"),
            LoginError::Transport(msg) => write!(f, "login request failed: {msg}"),
            LoginError::Decode(msg) => write!(f, "invalid login response: {msg}"),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// HTTP client for the authentication endpoint.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client for `base_url` (no trailing slash expected).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a single login attempt and returns the access token.
    ///
    /// No retry, no timeout beyond the transport defaults.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, LoginError> {
        let url = format!("{}{LOGIN_PATH}", self.base_url);
        tracing::debug!(%url, email, "sending login request");

        let response = self
            .http
            .post(&url)
            .query(&[("email", email), ("password", password)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoginError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| LoginError::Decode(e.without_url().to_string()))?;

        if body.access_token.is_empty() {
            return Err(LoginError::Decode("empty access_token".to_string()));
        }

        Ok(body.access_token)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(query_param("email", "a+b@c.com"))
            .and(query_param("password", "p&ss=1"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "tok-123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let token = client.login("a+b@c.com", "p&ss=1").await.unwrap();
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    async fn test_login_non_success_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let err = client.login("a@b.com", "x").await.unwrap_err();
        assert_eq!(err, LoginError::Rejected { status: 401 });
    }

    #[tokio::test]
    async fn test_login_success_without_token_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let err = client.login("a@b.com", "x").await.unwrap_err();
        assert!(matches!(err, LoginError::Decode(_)));
    }

    #[tokio::test]
    async fn test_login_unreachable_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = AuthClient::new("http://127.0.0.1:9");
        let err = client.login("a@b.com", "x").await.unwrap_err();
        assert!(matches!(err, LoginError::Transport(_)));
    }

    #[tokio::test]
    async fn test_transport_error_omits_credentials() {
        let client = AuthClient::new("http://127.0.0.1:9");
        let err = client.login("a@b.com", "Sup3rS3cret!").await.unwrap_err();

        let LoginError::Transport(msg) = &err else {
            panic!("expected transport error, got {err:?}");
        };
        let text = err.to_string();
        for shown in [msg.as_str(), text.as_str()] {
            assert!(!shown.contains("Sup3rS3cret"), "password leaked: {shown}");
            assert!(!shown.contains("password="), "query leaked: {shown}");
            assert!(!shown.contains("a%40b.com"), "email query leaked: {shown}");
        }
    }

    #[tokio::test]
    async fn test_decode_error_omits_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = AuthClient::new(server.uri());
        let err = client.login("a@b.com", "Sup3rS3cret!").await.unwrap_err();

        assert!(matches!(err, LoginError::Decode(_)));
        assert!(!err.to_string().contains("Sup3rS3cret"));
    }
}
