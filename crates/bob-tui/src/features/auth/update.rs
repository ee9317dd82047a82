//! Auth feature reducer.
//!
//! Applies login outcomes and logout to the page state. Store writes and
//! navigation are returned as effects.

use bob_core::api::LoginError;
use bob_core::auth::{Session, UserInfo};
use bob_core::routes::Route;

use super::{LOGIN_FAILED, LOGIN_REJECTED};
use crate::effects::UiEffect;
use crate::overlays::{AccountState, Overlay};
use crate::state::{Notice, TuiState};

/// Maps a login failure to the message shown to the user.
pub fn login_error_message(err: &LoginError) -> &'static str {
    match err {
        LoginError::Rejected { .. } => LOGIN_REJECTED,
        LoginError::Transport(_) | LoginError::Decode(_) => LOGIN_FAILED,
    }
}

/// Handles the outcome of a login request.
///
/// Success logs the user in even if the form was closed meanwhile. Failure
/// goes to the open login form, or to a notice when the form is gone.
pub fn handle_login_result(
    tui: &mut TuiState,
    overlay: &mut Option<Overlay>,
    email: String,
    result: Result<String, LoginError>,
) -> Vec<UiEffect> {
    let login_open = matches!(overlay, Some(Overlay::Account(AccountState::Login(_))));

    match result {
        Ok(token) => {
            tracing::info!(email = %email, "Login succeeded");
            let user = UserInfo { email };
            tui.session = Session::logged_in(user.clone());
            if login_open {
                *overlay = None;
            }
            vec![UiEffect::PersistLogin { token, user }]
        }
        Err(err) => {
            tracing::warn!(email = %email, error = %err, "Login failed");
            let message = login_error_message(&err);
            match overlay
                .as_mut()
                .and_then(Overlay::as_account_mut)
                .and_then(AccountState::login_form_mut)
            {
                Some(form) => form.error = Some(message.to_string()),
                None => tui.notice = Some(Notice::error(message)),
            }
            vec![]
        }
    }
}

/// Ends the session: closes any overlay and leaves for the logout screen.
pub fn logout(tui: &mut TuiState, overlay: &mut Option<Overlay>) -> Vec<UiEffect> {
    tracing::info!("Logging out");
    tui.session = Session::logged_out();
    *overlay = None;
    tui.last_route = Some(Route::LogoutComplete);
    vec![
        UiEffect::ClearSession,
        UiEffect::Navigate {
            route: Route::LogoutComplete,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::{LoginField, LoginForm};
    use crate::state::NoticeKind;

    fn open_form() -> Option<Overlay> {
        Some(Overlay::Account(AccountState::Login(LoginForm {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            focus: LoginField::Password,
            error: None,
        })))
    }

    #[test]
    fn test_success_logs_in_and_closes_form() {
        let mut tui = TuiState::new(Session::logged_out());
        let mut overlay = open_form();

        let effects = handle_login_result(
            &mut tui,
            &mut overlay,
            "a@b.com".to_string(),
            Ok("tok".to_string()),
        );

        assert!(overlay.is_none());
        assert!(tui.session.is_logged_in);
        assert_eq!(tui.session.email(), Some("a@b.com"));
        assert_eq!(
            effects,
            vec![UiEffect::PersistLogin {
                token: "tok".to_string(),
                user: UserInfo {
                    email: "a@b.com".to_string()
                },
            }]
        );
    }

    #[test]
    fn test_rejection_keeps_fields_and_sets_error() {
        let mut tui = TuiState::new(Session::logged_out());
        let mut overlay = open_form();

        let effects = handle_login_result(
            &mut tui,
            &mut overlay,
            "a@b.com".to_string(),
            Err(LoginError::Rejected { status: 401 }),
        );

        assert!(effects.is_empty());
        assert!(!tui.session.is_logged_in);
        let Some(Overlay::Account(AccountState::Login(form))) = overlay else {
            panic!("form should stay open");
        };
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "x");
        assert_eq!(form.error.as_deref(), Some(LOGIN_REJECTED));
    }

    #[test]
    fn test_transport_error_uses_generic_message() {
        let mut tui = TuiState::new(Session::logged_out());
        let mut overlay = open_form();

        handle_login_result(
            &mut tui,
            &mut overlay,
            "a@b.com".to_string(),
            Err(LoginError::Transport("connection refused".to_string())),
        );

        let Some(Overlay::Account(AccountState::Login(form))) = overlay else {
            panic!("form should stay open");
        };
        assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED));
    }

    #[test]
    fn test_late_failure_becomes_notice() {
        let mut tui = TuiState::new(Session::logged_out());
        let mut overlay = None;

        handle_login_result(
            &mut tui,
            &mut overlay,
            "a@b.com".to_string(),
            Err(LoginError::Decode("missing access_token".to_string())),
        );

        let notice = tui.notice.expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, LOGIN_FAILED);
    }

    #[test]
    fn test_logout_clears_session_and_navigates() {
        let mut tui = TuiState::new(Session::logged_in(UserInfo {
            email: "a@b.com".to_string(),
        }));
        let mut overlay = open_form();

        let effects = logout(&mut tui, &mut overlay);

        assert!(!tui.session.is_logged_in);
        assert!(overlay.is_none());
        assert_eq!(tui.last_route, Some(Route::LogoutComplete));
        assert_eq!(
            effects,
            vec![
                UiEffect::ClearSession,
                UiEffect::Navigate {
                    route: Route::LogoutComplete
                }
            ]
        );
    }
}
