//! Settings feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: rows, sections, and the list cursor
//! - `update.rs`: key handling that maps rows to page actions
//! - `render.rs`: section/row layout

mod render;
mod state;
mod update;

pub use render::{VERSION_LABEL, render_settings, settings_lines};
pub use state::{SECTIONS, SettingsRow, SettingsSection, SettingsState, selectable_rows};
pub use update::{RowAction, activate, handle_key};
