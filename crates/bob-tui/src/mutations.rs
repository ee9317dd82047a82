//! State mutations requested by overlays.
//!
//! Overlays only see `&TuiState`; anything they want changed on the page is
//! returned as a mutation and applied by the reducer.

use bob_core::sms::SmsOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Overwrite the SMS recognition preference.
    SetSmsOption(SmsOption),
    /// Show an informational notice line.
    ShowNotice(String),
    /// End the session and leave for the logout-complete screen.
    Logout,
}
