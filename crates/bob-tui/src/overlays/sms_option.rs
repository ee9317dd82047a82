use bob_core::sms::SmsOption;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone)]
pub struct SmsOptionState {
    pub selected: usize,
}

impl SmsOptionState {
    pub fn open(current: SmsOption) -> (Self, Vec<UiEffect>) {
        let selected = SmsOption::all()
            .iter()
            .position(|o| *o == current)
            .unwrap_or(0);
        (Self { selected }, vec![])
    }

    pub fn highlighted(&self) -> SmsOption {
        SmsOption::all()
            .get(self.selected)
            .copied()
            .unwrap_or_default()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        render_sms_option_picker(frame, self, area, tui.sms_option);
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < SmsOption::all().len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Char(' ') => OverlayUpdate::stay()
                .with_mutations(vec![StateMutation::SetSmsOption(self.highlighted())]),
            KeyCode::Enter => OverlayUpdate::close()
                .with_mutations(vec![StateMutation::SetSmsOption(self.highlighted())]),
            _ => OverlayUpdate::stay(),
        }
    }
}

pub fn render_sms_option_picker(
    frame: &mut Frame,
    picker: &SmsOptionState,
    area: Rect,
    current: SmsOption,
) {
    use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};

    let options = SmsOption::all();

    let hints = [
        InputHint::new("↑↓", "이동"),
        InputHint::new("Space", "선택"),
        InputHint::new("Enter", "선택 후 닫기"),
        InputHint::new("Esc", "닫기"),
    ];
    let layout = render_overlay(
        frame,
        area,
        area.height,
        &OverlayConfig {
            title: "인식된 문자 내역 등록방법",
            border_color: Color::Magenta,
            width: 60,
            height: options.len() as u16 + 8,
            hints: &hints,
        },
    );

    let list_height = options.len() as u16;
    let list_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, list_height);

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            let radio = if *option == current { "◉ " } else { "○ " };
            ListItem::new(Line::from(vec![
                Span::styled(radio, Style::default().fg(Color::Magenta)),
                Span::styled(
                    option.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    render_separator(frame, layout.body, list_height);

    let desc_y = list_height + 1;
    if desc_y < layout.body.height {
        let desc_area = Rect::new(
            layout.body.x,
            layout.body.y + desc_y,
            layout.body.width,
            layout.body.height - desc_y,
        );
        let desc = Paragraph::new(picker.highlighted().description())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(desc, desc_area);
    }
}
