//! Settings list key handling.

use bob_core::routes::{ConfirmAction, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{SettingsRow, SettingsState};

/// What the page should do after a key on the settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    OpenAccount,
    OpenSmsOptions,
    ToggleSms,
    Navigate(Route),
    Quit,
}

/// Action for activating `row` with Enter.
pub fn activate(row: SettingsRow) -> Option<RowAction> {
    match row {
        SettingsRow::Account => Some(RowAction::OpenAccount),
        SettingsRow::SmsRecognition => Some(RowAction::OpenSmsOptions),
        SettingsRow::ErrorReport => Some(RowAction::Navigate(Route::ErrorReport)),
        SettingsRow::RetakeQuiz => Some(RowAction::Navigate(Route::Quiz)),
        SettingsRow::ResetData => Some(RowAction::Navigate(Route::ConfirmAction(
            ConfirmAction::Reset,
        ))),
        SettingsRow::Withdraw => Some(RowAction::Navigate(Route::ConfirmAction(
            ConfirmAction::Withdraw,
        ))),
        SettingsRow::Version => None,
    }
}

/// Handles a key while no overlay is open.
pub fn handle_key(state: &mut SettingsState, key: KeyEvent) -> Option<RowAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(RowAction::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(RowAction::Quit),
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            None
        }
        KeyCode::Home => {
            state.move_first();
            None
        }
        KeyCode::End => {
            state.move_last();
            None
        }
        KeyCode::Enter => activate(state.selected()),
        KeyCode::Char(' ') if state.selected() == SettingsRow::SmsRecognition => {
            Some(RowAction::ToggleSms)
        }
        _ => None,
    }
}
