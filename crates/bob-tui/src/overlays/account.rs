use bob_core::auth::Session;
use bob_core::password::{MAX_PASSWORD_LEN, validate_password};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::OverlayUpdate;
use crate::auth::{
    LOGIN_EMPTY_FIELDS, LOGIN_IN_FLIGHT, PASSWORD_CHANGED, PASSWORD_POLICY, render_account_overlay,
};
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    fn other(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Scratch state of the login form. Dropped when the overlay closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    fn submit(&mut self, tui: &TuiState) -> OverlayUpdate {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(LOGIN_EMPTY_FIELDS.to_string());
            return OverlayUpdate::stay();
        }
        if tui.tasks.login.is_running() {
            self.error = Some(LOGIN_IN_FLIGHT.to_string());
            return OverlayUpdate::stay();
        }
        self.error = None;
        OverlayUpdate::stay().with_ui_effects(vec![UiEffect::SubmitLogin {
            task: None,
            email: self.email.clone(),
            password: self.password.clone(),
        }])
    }

    fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.focus {
                LoginField::Email => {
                    self.focus = LoginField::Password;
                    OverlayUpdate::stay()
                }
                LoginField::Password => self.submit(tui),
            },
            KeyCode::Backspace => {
                self.focused_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileAction {
    #[default]
    EditPassword,
    Logout,
}

/// In-progress password change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEdit {
    pub input: String,
    pub error: Option<String>,
}

impl PasswordEdit {
    fn push_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            if self.input.chars().count() >= MAX_PASSWORD_LEN {
                break;
            }
            self.input.push(c);
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.error = if validate_password(&self.input) {
            None
        } else {
            Some(PASSWORD_POLICY.to_string())
        };
    }
}

/// Credential view shown while logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub email: String,
    pub selected: ProfileAction,
    pub password_edit: Option<PasswordEdit>,
}

impl ProfileState {
    fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        if let Some(edit) = self.password_edit.as_mut() {
            return match key.code {
                KeyCode::Esc => {
                    self.password_edit = None;
                    OverlayUpdate::stay()
                }
                KeyCode::Enter => {
                    edit.revalidate();
                    if edit.error.is_some() {
                        return OverlayUpdate::stay();
                    }
                    self.password_edit = None;
                    tracing::warn!("Password change accepted locally; no backend call is made");
                    OverlayUpdate::stay().with_mutations(vec![StateMutation::ShowNotice(
                        PASSWORD_CHANGED.to_string(),
                    )])
                }
                KeyCode::Backspace => {
                    edit.input.pop();
                    edit.revalidate();
                    OverlayUpdate::stay()
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    edit.push_str(c.encode_utf8(&mut [0; 4]));
                    OverlayUpdate::stay()
                }
                _ => OverlayUpdate::stay(),
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.selected = match self.selected {
                    ProfileAction::EditPassword => ProfileAction::Logout,
                    ProfileAction::Logout => ProfileAction::EditPassword,
                };
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.selected {
                ProfileAction::EditPassword => self.start_edit(),
                ProfileAction::Logout => Self::logout(),
            },
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('l') => Self::logout(),
            _ => OverlayUpdate::stay(),
        }
    }

    fn start_edit(&mut self) -> OverlayUpdate {
        if self.password_edit.is_none() {
            self.password_edit = Some(PasswordEdit::default());
        }
        OverlayUpdate::stay()
    }

    fn logout() -> OverlayUpdate {
        OverlayUpdate::close().with_mutations(vec![StateMutation::Logout])
    }
}

/// Account overlay: login form when logged out, credentials when logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountState {
    Login(LoginForm),
    Profile(ProfileState),
}

impl AccountState {
    pub fn open(session: &Session) -> (Self, Vec<UiEffect>) {
        let state = match session.email() {
            Some(email) if session.is_logged_in => AccountState::Profile(ProfileState {
                email: email.to_string(),
                selected: ProfileAction::default(),
                password_edit: None,
            }),
            _ => AccountState::Login(LoginForm::default()),
        };
        (state, vec![])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        render_account_overlay(frame, self, area, tui);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let editing = matches!(
            self,
            AccountState::Profile(ProfileState {
                password_edit: Some(_),
                ..
            })
        );

        match key.code {
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Esc if !editing => OverlayUpdate::close(),
            _ => match self {
                AccountState::Login(form) => form.handle_key(tui, key),
                AccountState::Profile(profile) => profile.handle_key(key),
            },
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        let line: String = text.chars().filter(|c| !c.is_control()).collect();
        match self {
            AccountState::Login(form) => form.focused_mut().push_str(&line),
            AccountState::Profile(ProfileState {
                password_edit: Some(edit),
                ..
            }) => edit.push_str(&line),
            AccountState::Profile(_) => {}
        }
    }

    pub fn login_form_mut(&mut self) -> Option<&mut LoginForm> {
        match self {
            AccountState::Login(form) => Some(form),
            AccountState::Profile(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use bob_core::auth::UserInfo;

    use super::*;
    use crate::common::TaskId;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut AccountState, tui: &TuiState, text: &str) {
        for c in text.chars() {
            state.handle_key(tui, key(KeyCode::Char(c)));
        }
    }

    fn logged_in() -> TuiState {
        TuiState::new(Session::logged_in(UserInfo {
            email: "me@bob.app".to_string(),
        }))
    }

    fn login_form(state: &AccountState) -> &LoginForm {
        match state {
            AccountState::Login(form) => form,
            AccountState::Profile(_) => panic!("expected login form"),
        }
    }

    fn password_edit(state: &AccountState) -> Option<&PasswordEdit> {
        match state {
            AccountState::Profile(p) => p.password_edit.as_ref(),
            AccountState::Login(_) => panic!("expected profile"),
        }
    }

    #[test]
    fn test_empty_fields_set_error_without_request() {
        let tui = TuiState::new(Session::logged_out());
        let (mut state, _) = AccountState::open(&tui.session);
        type_str(&mut state, &tui, "a@b.com");
        state.handle_key(&tui, key(KeyCode::Tab));

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert!(update.effects.is_empty());
        assert_eq!(update.transition, OverlayTransition::Stay);
        assert_eq!(login_form(&state).error.as_deref(), Some(LOGIN_EMPTY_FIELDS));
    }

    #[test]
    fn test_submit_emits_login_effect() {
        let tui = TuiState::new(Session::logged_out());
        let (mut state, _) = AccountState::open(&tui.session);
        type_str(&mut state, &tui, "a@b.com");
        state.handle_key(&tui, key(KeyCode::Enter));
        type_str(&mut state, &tui, "x");

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert_eq!(
            update.effects,
            vec![UiEffect::SubmitLogin {
                task: None,
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            }]
        );
        assert_eq!(login_form(&state).error, None);
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut tui = TuiState::new(Session::logged_out());
        tui.tasks.login.reserve(TaskId(0));
        let mut state = AccountState::Login(LoginForm {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            focus: LoginField::Password,
            error: None,
        });

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert!(update.effects.is_empty());
        assert_eq!(login_form(&state).error.as_deref(), Some(LOGIN_IN_FLIGHT));
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let tui = TuiState::new(Session::logged_out());
        let (mut state, _) = AccountState::open(&tui.session);
        type_str(&mut state, &tui, "ab");
        state.handle_key(&tui, key(KeyCode::Backspace));
        state.handle_key(&tui, key(KeyCode::Down));
        type_str(&mut state, &tui, "pw");

        let form = login_form(&state);
        assert_eq!(form.email, "a");
        assert_eq!(form.password, "pw");
    }

    #[test]
    fn test_esc_closes_login_form() {
        let tui = TuiState::new(Session::logged_out());
        let (mut state, _) = AccountState::open(&tui.session);
        let update = state.handle_key(&tui, key(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
    }

    #[test]
    fn test_password_edit_validates_live() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Char('e')));
        assert_eq!(password_edit(&state), Some(&PasswordEdit::default()));

        type_str(&mut state, &tui, "abc");
        assert_eq!(
            password_edit(&state).and_then(|e| e.error.as_deref()),
            Some(PASSWORD_POLICY)
        );

        type_str(&mut state, &tui, "123!x");
        let edit = password_edit(&state).unwrap();
        assert_eq!(edit.input, "abc123!x");
        assert_eq!(edit.error, None);
    }

    #[test]
    fn test_password_edit_caps_length() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Enter));
        type_str(&mut state, &tui, "abcdefgh1234567!!!");

        let edit = password_edit(&state).unwrap();
        assert_eq!(edit.input.chars().count(), MAX_PASSWORD_LEN);
        assert_eq!(edit.input, "abcdefgh1234567");
        // At the cap but no symbol yet.
        assert!(edit.error.is_some());
    }

    #[test]
    fn test_valid_password_submit_closes_edit_with_notice() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Char('e')));
        type_str(&mut state, &tui, "abcd123!");

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert_eq!(update.transition, OverlayTransition::Stay);
        assert_eq!(
            update.mutations,
            vec![StateMutation::ShowNotice(PASSWORD_CHANGED.to_string())]
        );
        assert_eq!(password_edit(&state), None);
    }

    #[test]
    fn test_invalid_password_submit_keeps_edit_open() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Char('e')));

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert!(update.mutations.is_empty());
        let edit = password_edit(&state).unwrap();
        assert_eq!(edit.error.as_deref(), Some(PASSWORD_POLICY));
    }

    #[test]
    fn test_esc_cancels_edit_before_closing() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Char('e')));
        type_str(&mut state, &tui, "bad");

        let update = state.handle_key(&tui, key(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Stay);
        assert_eq!(password_edit(&state), None);

        let update = state.handle_key(&tui, key(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
    }

    #[test]
    fn test_logout_action_closes_with_mutation() {
        let tui = logged_in();
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_key(&tui, key(KeyCode::Down));

        let update = state.handle_key(&tui, key(KeyCode::Enter));

        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(update.mutations, vec![StateMutation::Logout]);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let tui = TuiState::new(Session::logged_out());
        let (mut state, _) = AccountState::open(&tui.session);
        state.handle_paste("a@b.com\n");
        assert_eq!(login_form(&state).email, "a@b.com");
    }
}
