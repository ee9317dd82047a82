//! Auth effect handlers.

use bob_core::api::AuthClient;
use bob_core::auth::{AuthStore, UserInfo};

use crate::events::UiEvent;

/// Sends one login request and wraps the outcome for the reducer.
pub async fn login(client: AuthClient, email: String, password: String) -> UiEvent {
    let result = client.login(&email, &password).await;
    UiEvent::LoginResult { email, result }
}

/// Hands a fresh token to the store. Failures are logged, never surfaced.
pub fn persist_login(store: &mut dyn AuthStore, token: String, user: UserInfo) {
    if let Err(err) = store.login(token, user) {
        tracing::error!("Failed to store session: {err:#}");
    }
}

/// Clears the store. Failures are logged, never surfaced.
pub fn clear_session(store: &mut dyn AuthStore) {
    if let Err(err) = store.logout() {
        tracing::error!("Failed to clear session: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use bob_core::api::{LOGIN_PATH, LoginError};
    use bob_core::auth::MemoryAuthStore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_login_wraps_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(query_param("email", "a@b.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "tok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let event = login(
            AuthClient::new(server.uri()),
            "a@b.com".to_string(),
            "x".to_string(),
        )
        .await;

        let UiEvent::LoginResult { email, result } = event else {
            panic!("expected login result");
        };
        assert_eq!(email, "a@b.com");
        assert_eq!(result, Ok("tok".to_string()));
    }

    #[tokio::test]
    async fn test_login_wraps_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let event = login(
            AuthClient::new(server.uri()),
            "a@b.com".to_string(),
            "x".to_string(),
        )
        .await;

        let UiEvent::LoginResult { result, .. } = event else {
            panic!("expected login result");
        };
        assert_eq!(result, Err(LoginError::Rejected { status: 401 }));
    }

    #[test]
    fn test_persist_then_clear() {
        let mut store = MemoryAuthStore::new();
        persist_login(
            &mut store,
            "tok".to_string(),
            UserInfo {
                email: "a@b.com".to_string(),
            },
        );
        assert_eq!(store.token(), Some("tok"));
        assert!(store.session().is_logged_in);

        clear_session(&mut store);
        assert!(!store.session().is_logged_in);
    }
}
