//! Bottom navigation bar.
//!
//! Display-only on this page: the active tab is fixed to `mypage`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Active tab key for this page.
pub const ACTIVE_TAB: &str = "mypage";

/// `(key, label)` for each tab, left to right.
pub const TABS: &[(&str, &str)] = &[
    ("home", "홈"),
    ("ledger", "가계부"),
    ("report", "리포트"),
    ("mypage", "내 정보"),
];

pub fn navbar_line(active: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   │   ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *key == active {
            Style::default()
                .fg(Color::Rgb(75, 75, 255))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(*label, style));
    }
    Line::from(spans)
}

pub fn render_navbar(frame: &mut Frame, area: Rect, active: &str) {
    let para = Paragraph::new(navbar_line(active))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(para, area);
}
