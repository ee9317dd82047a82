//! Page runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the runtime drains
//! `inbox_rx` each loop iteration and feeds the events to the reducer.
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `handlers/`: Effect handler implementations

mod handlers;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bob_core::api::AuthClient;
use bob_core::auth::AuthStore;
use bob_core::routes::Router;
use crossterm::event;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{PageTerminal, TerminalGuard};
use crate::{render, terminal, update};

/// Tick interval while something is animating or the user is typing.
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Tick interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen page runtime.
///
/// Owns the terminal, the page state and the collaborators effects act on.
pub struct TuiRuntime {
    terminal: PageTerminal,
    /// Restores the terminal on drop. Declared after `terminal` so it drops last.
    _guard: TerminalGuard,
    /// Page state (split: tui + overlay).
    pub state: AppState,
    store: Box<dyn AuthStore>,
    router: Box<dyn Router>,
    client: AuthClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen and builds the page from the store's session.
    pub fn new(
        client: AuthClient,
        store: Box<dyn AuthStore>,
        router: Box<dyn Router>,
    ) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(store.session());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            _guard: TerminalGuard,
            state,
            store,
            router,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until the page quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            logged_in = self.state.tui.session.is_logged_in,
            api = self.client.base_url(),
            "Account page started"
        );
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                if !matches!(&event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        tracing::info!("Account page closed");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || self.state.tui.notice.is_some()
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SubmitLogin {
                task,
                email,
                password,
            } => {
                let Some(task) = task else {
                    tracing::warn!("Login effect without a task id; dropped");
                    return;
                };
                let client = self.client.clone();
                self.spawn_task(TaskKind::Login, task, move || {
                    handlers::login(client, email, password)
                });
            }
            other => {
                apply_collaborator_effect(other, self.store.as_mut(), self.router.as_mut());
            }
        }
    }
}

/// Runs an effect that only touches the auth store or the router.
///
/// `Quit` and `SubmitLogin` need the runtime itself and are ignored here.
fn apply_collaborator_effect(
    effect: UiEffect,
    store: &mut dyn AuthStore,
    router: &mut dyn Router,
) {
    match effect {
        UiEffect::PersistLogin { token, user } => handlers::persist_login(store, token, user),
        UiEffect::ClearSession => handlers::clear_session(store),
        UiEffect::Navigate { route } => router.navigate(route),
        UiEffect::Quit | UiEffect::SubmitLogin { .. } => {
            tracing::debug!("Runtime effect reached the collaborator path; ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use bob_core::auth::{MemoryAuthStore, Session, UserInfo};
    use bob_core::routes::{ConfirmAction, RecordingRouter, Route};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update::update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn run_all(effects: Vec<UiEffect>, store: &mut dyn AuthStore, router: &mut dyn Router) {
        for effect in effects {
            apply_collaborator_effect(effect, store, router);
        }
    }

    fn user() -> UserInfo {
        UserInfo {
            email: "me@bob.app".to_string(),
        }
    }

    #[test]
    fn test_logout_clears_store_and_navigates() {
        let mut store = MemoryAuthStore::new();
        store.login("tok".to_string(), user()).unwrap();
        let mut router = RecordingRouter::new();
        let mut app = AppState::new(store.session());

        press(&mut app, KeyCode::Enter);
        let effects = press(&mut app, KeyCode::Char('l'));
        run_all(effects, &mut store, &mut router);

        assert!(!store.session().is_logged_in);
        assert_eq!(store.token(), None);
        assert_eq!(router.history(), &[Route::LogoutComplete]);
        assert_eq!(Route::LogoutComplete.path(), "/logout-complete");
    }

    #[test]
    fn test_login_result_reaches_store() {
        let mut store = MemoryAuthStore::new();
        let mut router = RecordingRouter::new();
        let mut app = AppState::new(Session::logged_out());

        press(&mut app, KeyCode::Enter);
        for c in "me@bob.app".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        let submitted = press(&mut app, KeyCode::Enter);
        let [UiEffect::SubmitLogin { task: Some(id), .. }] = submitted.as_slice() else {
            panic!("expected one login submission, got {submitted:?}");
        };

        let effects = update::update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Login,
                completed: TaskCompleted {
                    id: *id,
                    result: Box::new(UiEvent::LoginResult {
                        email: "me@bob.app".to_string(),
                        result: Ok("tok".to_string()),
                    }),
                },
            },
        );
        run_all(effects, &mut store, &mut router);

        assert_eq!(store.session(), Session::logged_in(user()));
        assert_eq!(store.token(), Some("tok"));
        assert!(router.history().is_empty());
    }

    #[test]
    fn test_navigation_rows_reach_router() {
        let mut store = MemoryAuthStore::new();
        let mut router = RecordingRouter::new();
        let mut app = AppState::new(Session::logged_out());

        press(&mut app, KeyCode::End);
        let effects = press(&mut app, KeyCode::Enter);
        run_all(effects, &mut store, &mut router);

        assert_eq!(
            router.last(),
            Some(Route::ConfirmAction(ConfirmAction::Withdraw))
        );
    }

    #[test]
    fn test_runtime_effects_are_ignored() {
        let mut store = MemoryAuthStore::new();
        let mut router = RecordingRouter::new();

        run_all(
            vec![
                UiEffect::Quit,
                UiEffect::SubmitLogin {
                    task: None,
                    email: "a@b.com".to_string(),
                    password: "x".to_string(),
                },
            ],
            &mut store,
            &mut router,
        );

        assert!(!store.session().is_logged_in);
        assert!(router.history().is_empty());
    }
}
