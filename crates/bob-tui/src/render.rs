//! Pure view/render functions for the page.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::navbar::{ACTIVE_TAB, render_navbar};
use crate::overlays::OverlayExt;
use crate::settings::render_settings;
use crate::state::{AppState, NoticeKind, TuiState};

const HEADER_HEIGHT: u16 = 3;
const NOTICE_HEIGHT: u16 = 1;
const HINTS_HEIGHT: u16 = 1;
const NAVBAR_HEIGHT: u16 = 2;

/// Renders the entire page to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let [header, body, notice, hints, navbar] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(NOTICE_HEIGHT),
        Constraint::Length(HINTS_HEIGHT),
        Constraint::Length(NAVBAR_HEIGHT),
    ])
    .areas(area);

    render_header(frame, header);
    render_settings(frame, body, state);
    render_notice(frame, notice, state);
    render_hints(frame, hints);
    render_navbar(frame, navbar, ACTIVE_TAB);

    // Overlays cover everything above the navigation bar.
    let page = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(NAVBAR_HEIGHT),
    );
    app.overlay.render(frame, page, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "내 정보",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    let inner = Rect::new(area.x, area.y + 1, area.width, area.height.min(1));
    frame.render_widget(title, inner);
}

fn render_notice(frame: &mut Frame, area: Rect, state: &TuiState) {
    let Some(notice) = &state.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let text = truncate_with_ellipsis(&notice.text, area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color))).alignment(Alignment::Center),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled("↑↓", key),
        Span::styled(" 이동 • ", dim),
        Span::styled("Enter", key),
        Span::styled(" 선택 • ", dim),
        Span::styled("Space", key),
        Span::styled(" 문자 인식 켜기/끄기 • ", dim),
        Span::styled("q", key),
        Span::styled(" 종료", dim),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
