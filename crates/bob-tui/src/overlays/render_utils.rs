use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::text::mask;
use crate::common::truncate_start_with_ellipsis;

/// Centers a `width` x `height` box inside the page area above the bottom navigation.
pub fn calculate_overlay_area(area: Rect, page_height: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(page_height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (page_height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the popup area and draws a rounded border with a bold title.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Draws a standard overlay (container + hint footer) and returns its layout.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    page_height: u16,
    config: &OverlayConfig<'_>,
) -> OverlayLayout {
    let popup = calculate_overlay_area(area, page_height, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);

    if !config.hints.is_empty() {
        render_hints(frame, footer, config.hints, config.border_color);
    }

    OverlayLayout {
        popup,
        body,
        footer,
    }
}

/// Keyboard hint shown in an overlay footer.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// A labelled single-line text field ("이메일  someone@…█").
pub struct InputField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub secret: bool,
    pub accent: Color,
}

/// Column where field values start, so labels line up.
const FIELD_LABEL_WIDTH: usize = 10;

pub fn render_input_field(frame: &mut Frame, area: Rect, field: &InputField<'_>) {
    let label_width = field.label.width().max(FIELD_LABEL_WIDTH);
    let label = format!("{}{}", field.label, " ".repeat(label_width - field.label.width()));
    let max_value_width = (area.width as usize).saturating_sub(label_width + 1);

    let label_style = if field.focused {
        Style::default()
            .fg(field.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(label, label_style)];

    if field.value.is_empty() {
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(field.accent)));
        }
        spans.push(Span::styled(
            truncate_start_with_ellipsis(field.placeholder, max_value_width),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let shown = if field.secret {
            mask(field.value)
        } else {
            field.value.to_string()
        };
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&shown, max_value_width),
            Style::default().fg(Color::White),
        ));
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(field.accent)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders `hints` centered on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}
