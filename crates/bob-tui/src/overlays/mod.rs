//! Overlay modules for the page.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `account.rs`: Login form, or credential display/edit when logged in
//! - `sms_option.rs`: SMS recognition mode selection
//! - `render_utils.rs`: Shared rendering utilities for overlays
//!
//! At most one overlay is open; `Option<Overlay>` is the page's UI mode.

pub mod account;
pub mod render_utils;
pub mod sms_option;

pub use account::{AccountState, LoginField, LoginForm, PasswordEdit, ProfileAction, ProfileState};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use sms_option::SmsOptionState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    Account,
    SmsOption,
}

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Account(AccountState),
    SmsOption(SmsOptionState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Account(a) => a.render(frame, area, tui),
            Overlay::SmsOption(s) => s.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Account(a) => a.handle_key(tui, key),
            Overlay::SmsOption(s) => s.handle_key(tui, key),
        }
    }

    /// Routes pasted text to the focused text field, if any.
    pub fn handle_paste(&mut self, text: &str) {
        if let Overlay::Account(a) = self {
            a.handle_paste(text);
        }
    }

    pub fn as_account_mut(&mut self) -> Option<&mut AccountState> {
        match self {
            Overlay::Account(a) => Some(a),
            Overlay::SmsOption(_) => None,
        }
    }
}

/// Opens the overlay for `request`.
pub fn open(request: OverlayRequest, tui: &TuiState) -> (Overlay, Vec<UiEffect>) {
    match request {
        OverlayRequest::Account => {
            let (state, effects) = AccountState::open(&tui.session);
            (Overlay::Account(state), effects)
        }
        OverlayRequest::SmsOption => {
            let (state, effects) = SmsOptionState::open(tui.sms_option);
            (Overlay::SmsOption(state), effects)
        }
    }
}

/// Dispatches a key to the active overlay.
///
/// Returns `None` when no overlay is open so the page handles the key.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|o| o.handle_key(tui, key))
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }
}

#[cfg(test)]
mod tests {
    use bob_core::auth::{Session, UserInfo};
    use bob_core::sms::SmsOption;

    use super::*;

    #[test]
    fn test_open_account_depends_on_session() {
        let tui = TuiState::new(Session::logged_out());
        let (overlay, effects) = open(OverlayRequest::Account, &tui);
        assert!(effects.is_empty());
        assert!(matches!(overlay, Overlay::Account(AccountState::Login(_))));

        let tui = TuiState::new(Session::logged_in(UserInfo {
            email: "me@bob.app".to_string(),
        }));
        let (overlay, _) = open(OverlayRequest::Account, &tui);
        let Overlay::Account(AccountState::Profile(profile)) = overlay else {
            panic!("expected profile view");
        };
        assert_eq!(profile.email, "me@bob.app");
    }

    #[test]
    fn test_open_sms_option_starts_on_current() {
        let mut tui = TuiState::new(Session::logged_out());
        tui.sms_option = SmsOption::Select;

        let (overlay, _) = open(OverlayRequest::SmsOption, &tui);
        let Overlay::SmsOption(state) = overlay else {
            panic!("expected sms overlay");
        };
        assert_eq!(state.highlighted(), SmsOption::Select);
    }
}
