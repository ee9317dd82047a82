//! Page reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use bob_core::routes::Route;
use bob_core::sms::SmsOption;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::StateMutation;
use crate::overlays::{self, OverlayRequest, OverlayTransition, OverlayUpdate};
use crate::settings::RowAction;
use crate::state::{AppState, Notice, TuiState};
use crate::{auth, settings};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.expire_notice(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.viewport = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "Dropping stale task result");
                vec![]
            }
        }
        UiEvent::LoginResult { email, result } => {
            auth::handle_login_result(&mut app.tui, &mut app.overlay, email, result)
        }
    };
    assign_task_ids(&mut app.tui, effects)
}

/// Gives task-spawning effects an id and marks the task running right away.
fn assign_task_ids(tui: &mut TuiState, effects: Vec<UiEffect>) -> Vec<UiEffect> {
    effects
        .into_iter()
        .map(|effect| match effect {
            UiEffect::SubmitLogin {
                task: None,
                email,
                password,
            } => {
                let id = tui.task_seq.next_id();
                tui.tasks.login.reserve(id);
                UiEffect::SubmitLogin {
                    task: Some(id),
                    email,
                    password,
                }
            }
            other => other,
        })
        .collect()
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for mutation in mutations {
        match mutation {
            StateMutation::SetSmsOption(option) => set_sms_option(&mut app.tui, option),
            StateMutation::ShowNotice(text) => app.tui.notice = Some(Notice::info(text)),
            StateMutation::Logout => {
                effects.extend(auth::logout(&mut app.tui, &mut app.overlay));
            }
        }
    }
    effects
}

fn set_sms_option(tui: &mut TuiState, option: SmsOption) {
    if tui.sms_option != option {
        tracing::info!(option = option.key(), "SMS recognition option changed for this session");
    }
    tui.sms_option = option;
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => app.overlay = None,
        OverlayTransition::Open(request) => effects.extend(open_overlay_request(app, request)),
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) -> Vec<UiEffect> {
    let (overlay, effects) = overlays::open(request, &app.tui);
    app.overlay = Some(overlay);
    effects
}

/// Hands `route` to the router; any open overlay is closed first.
fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    app.overlay = None;
    app.tui.last_route = Some(route);
    vec![UiEffect::Navigate { route }]
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.handle_paste(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        let mut effects = apply_mutations(app, std::mem::take(&mut update.mutations));
        effects.extend(apply_overlay_update(app, update));
        return effects;
    }

    // No overlay active - the settings list handles the key
    match settings::handle_key(&mut app.tui.settings, key) {
        None => vec![],
        Some(RowAction::OpenAccount) => open_overlay_request(app, OverlayRequest::Account),
        Some(RowAction::OpenSmsOptions) => open_overlay_request(app, OverlayRequest::SmsOption),
        Some(RowAction::ToggleSms) => {
            let toggled = app.tui.sms_option.toggled();
            set_sms_option(&mut app.tui, toggled);
            vec![]
        }
        Some(RowAction::Navigate(route)) => navigate(app, route),
        Some(RowAction::Quit) => vec![UiEffect::Quit],
    }
}
