//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session        (snapshot of the auth store)
//! │   ├── sms_option: SmsOption   (session-local preference)
//! │   ├── settings: SettingsState (row cursor)
//! │   ├── task_seq / tasks        (login request lifecycle)
//! │   └── notice                  (transient acknowledgement line)
//! └── overlay: Option<Overlay>    (account or SMS modal, at most one)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can hold `&mut self` and `&TuiState` at the same time.

use std::time::{Duration, Instant};

use bob_core::auth::Session;
use bob_core::routes::Route;
use bob_core::sms::SmsOption;

use crate::common::{TaskSeq, Tasks};
use crate::overlays::Overlay;
use crate::settings::SettingsState;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Combined application state for the page.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            tui: TuiState::new(session),
            overlay: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown above the bottom navigation.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
            shown_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

/// Page state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Session snapshot; the auth store stays the owner.
    pub session: Session,
    /// SMS recognition preference. Not persisted anywhere.
    pub sms_option: SmsOption,
    /// Settings list cursor.
    pub settings: SettingsState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Transient acknowledgement or error line.
    pub notice: Option<Notice>,
    /// Last route handed to the router.
    pub last_route: Option<Route>,
    /// Spinner animation frame counter (login in flight).
    pub spinner_frame: usize,
    /// Terminal size from the latest frame.
    pub viewport: (u16, u16),
}

impl TuiState {
    pub fn new(session: Session) -> Self {
        Self {
            should_quit: false,
            session,
            sms_option: SmsOption::default(),
            settings: SettingsState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            notice: None,
            last_route: None,
            spinner_frame: 0,
            viewport: (0, 0),
        }
    }

    /// Drops the notice once it has been visible long enough.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let app = AppState::new(Session::logged_out());
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.sms_option, SmsOption::Direct);
        assert!(!app.tui.session.is_logged_in);
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_notice_expiry() {
        let mut tui = TuiState::new(Session::logged_out());
        tui.notice = Some(Notice::info("ok"));

        let shown_at = tui.notice.as_ref().unwrap().shown_at;
        tui.expire_notice(shown_at + Duration::from_secs(1));
        assert!(tui.notice.is_some());

        tui.expire_notice(shown_at + NOTICE_DURATION);
        assert!(tui.notice.is_none());
    }
}
