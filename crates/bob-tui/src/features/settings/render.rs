//! Settings list view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::state::{SECTIONS, SettingsRow};
use crate::common::truncate_with_ellipsis;
use crate::state::TuiState;

pub const VERSION_LABEL: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const ACCENT: Color = Color::Rgb(75, 75, 255);
const MUTED: Color = Color::Rgb(107, 114, 128);
const DANGER: Color = Color::Rgb(239, 68, 68);

/// Right-hand value of a row.
fn row_value(row: SettingsRow, tui: &TuiState) -> Span<'static> {
    let muted = Style::default().fg(MUTED);
    match row {
        SettingsRow::Account => match tui.session.email() {
            Some(email) if tui.session.is_logged_in => Span::styled(email.to_string(), muted),
            _ => Span::styled("로그인", Style::default().fg(ACCENT)),
        },
        SettingsRow::SmsRecognition => {
            let checkbox = if tui.sms_option.is_enabled() {
                "[x]"
            } else {
                "[ ]"
            };
            Span::styled(
                format!("{} {checkbox}", tui.sms_option.display_name()),
                muted,
            )
        }
        SettingsRow::Version => Span::styled(VERSION_LABEL, muted),
        SettingsRow::ErrorReport
        | SettingsRow::RetakeQuiz
        | SettingsRow::ResetData
        | SettingsRow::Withdraw => Span::styled("›", Style::default().fg(Color::Gray)),
    }
}

fn row_line(row: SettingsRow, selected: bool, width: usize, tui: &TuiState) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let base = if selected {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };

    if row == SettingsRow::Withdraw {
        let label = format!("{marker}{}", row.label());
        return Line::from(Span::styled(label, base.fg(DANGER))).alignment(Alignment::Center);
    }

    let value = row_value(row, tui);
    let value_width = value.content.width();
    let label_room = width.saturating_sub(value_width + marker.width() + 1);
    let label = truncate_with_ellipsis(row.label(), label_room);
    let gap = width.saturating_sub(marker.width() + label.width() + value_width);

    Line::from(vec![
        Span::styled(format!("{marker}{label}{}", " ".repeat(gap)), base),
        value,
    ])
}

/// Builds the page lines and the index of the selected row's line.
pub fn settings_lines(tui: &TuiState, width: usize) -> (Vec<Line<'static>>, usize) {
    let selected = tui.settings.selected();
    let mut lines = Vec::new();
    let mut cursor_line = 0;

    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        if let Some(title) = section.title {
            lines.push(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(MUTED)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        for row in section.rows {
            if *row == selected {
                cursor_line = lines.len();
            }
            lines.push(row_line(*row, *row == selected, width, tui));
        }
    }

    (lines, cursor_line)
}

/// Renders the settings sections, scrolled so the selected row stays visible.
pub fn render_settings(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let inner = Rect::new(
        area.x + 2,
        area.y,
        area.width.saturating_sub(4),
        area.height,
    );
    let (lines, cursor_line) = settings_lines(tui, inner.width as usize);
    let scroll = cursor_line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let para = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(para, inner);
}
