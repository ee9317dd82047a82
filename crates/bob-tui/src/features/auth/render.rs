//! Auth feature view.
//!
//! Rendering for the account overlay: login form or credential view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::LOGIN_IN_FLIGHT;
use crate::overlays::render_utils::{
    InputField, InputHint, OverlayConfig, render_input_field, render_overlay,
};
use crate::overlays::{AccountState, LoginField, LoginForm, ProfileAction, ProfileState};
use crate::state::TuiState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const ACCENT: Color = Color::Cyan;

/// Renders the account overlay.
pub fn render_account_overlay(
    frame: &mut Frame,
    account: &AccountState,
    area: Rect,
    tui: &TuiState,
) {
    match account {
        AccountState::Login(form) => render_login_form(frame, form, area, tui),
        AccountState::Profile(profile) => render_profile(frame, profile, area),
    }
}

fn render_login_form(frame: &mut Frame, form: &LoginForm, area: Rect, tui: &TuiState) {
    let hints = [
        InputHint::new("Tab", "이동"),
        InputHint::new("Enter", "로그인"),
        InputHint::new("Esc", "닫기"),
    ];
    let layout = render_overlay(
        frame,
        area,
        area.height,
        &OverlayConfig {
            title: "로그인",
            border_color: ACCENT,
            width: 56,
            height: 9,
            hints: &hints,
        },
    );
    let body = layout.body;

    let row = |offset: u16| Rect::new(body.x, body.y + offset, body.width, 1);

    render_input_field(
        frame,
        row(0),
        &InputField {
            label: "이메일 주소",
            value: &form.email,
            placeholder: "이메일을 입력하세요",
            focused: form.focus == LoginField::Email,
            secret: false,
            accent: ACCENT,
        },
    );
    render_input_field(
        frame,
        row(1),
        &InputField {
            label: "비밀번호",
            value: &form.password,
            placeholder: "비밀번호를 입력하세요",
            focused: form.focus == LoginField::Password,
            secret: true,
            accent: ACCENT,
        },
    );

    let status = if tui.tasks.login.is_running() {
        let spinner = SPINNER_FRAMES[tui.spinner_frame % SPINNER_FRAMES.len()];
        Some(Line::from(Span::styled(
            format!("{spinner} {LOGIN_IN_FLIGHT}"),
            Style::default().fg(Color::Yellow),
        )))
    } else {
        form.error.as_deref().map(error_line)
    };

    if let Some(line) = status
        && body.height > 3
    {
        frame.render_widget(Paragraph::new(line), row(3));
    }
}

fn render_profile(frame: &mut Frame, profile: &ProfileState, area: Rect) {
    let editing = profile.password_edit.is_some();
    let edit_hints = [
        InputHint::new("Enter", "저장"),
        InputHint::new("Esc", "취소"),
    ];
    let view_hints = [
        InputHint::new("↑↓", "이동"),
        InputHint::new("Enter", "선택"),
        InputHint::new("Esc", "닫기"),
    ];
    let layout = render_overlay(
        frame,
        area,
        area.height,
        &OverlayConfig {
            title: "로그인 정보",
            border_color: ACCENT,
            width: 56,
            height: 11,
            hints: if editing { &edit_hints[..] } else { &view_hints[..] },
        },
    );
    let body = layout.body;
    let row = |offset: u16| Rect::new(body.x, body.y + offset, body.width, 1);

    let label = Style::default().fg(Color::Gray);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("이메일 주소  ", label),
            Span::raw(profile.email.as_str()),
        ])),
        row(0),
    );

    if let Some(edit) = &profile.password_edit {
        render_input_field(
            frame,
            row(1),
            &InputField {
                label: "새 비밀번호",
                value: &edit.input,
                placeholder: "새 비밀번호 입력",
                focused: true,
                secret: true,
                accent: ACCENT,
            },
        );
        if let Some(error) = edit.error.as_deref() {
            frame.render_widget(Paragraph::new(error_line(error)), row(2));
        }
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("비밀번호     ", label),
                Span::raw("********"),
            ])),
            row(1),
        );
    }

    let actions = [
        (ProfileAction::EditPassword, "e", "비밀번호 수정하기"),
        (ProfileAction::Logout, "l", "로그아웃"),
    ];
    for (i, (action, shortcut, text)) in actions.into_iter().enumerate() {
        let offset = 4 + i as u16;
        if offset >= body.height {
            break;
        }
        let selected = !editing && profile.selected == action;
        let style = if selected {
            Style::default()
                .bg(ACCENT)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if selected { "▶ " } else { "  " };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{marker}{text}"), style),
                Span::styled(format!("  [{shortcut}]"), Style::default().fg(Color::DarkGray)),
            ])),
            row(offset),
        );
    }
}

fn error_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Red)))
}
