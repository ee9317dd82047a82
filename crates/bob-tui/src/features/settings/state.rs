//! Settings list model.
//!
//! Rows are grouped into titled sections. The cursor only visits rows the
//! user can act on; the version row is display-only.

/// A row on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Account,
    SmsRecognition,
    ErrorReport,
    RetakeQuiz,
    ResetData,
    Version,
    Withdraw,
}

impl SettingsRow {
    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::Account => "로그인 정보",
            SettingsRow::SmsRecognition => "문자 인식 기능 사용하기",
            SettingsRow::ErrorReport => "오류 신고",
            SettingsRow::RetakeQuiz => "MBTI 테스트 다시 하기",
            SettingsRow::ResetData => "데이터 초기화",
            SettingsRow::Version => "프로그램 버전",
            SettingsRow::Withdraw => "서비스 탈퇴하기",
        }
    }

    pub fn is_selectable(self) -> bool {
        self != SettingsRow::Version
    }
}

/// A titled group of rows. Untitled sections render as a bare card.
#[derive(Debug)]
pub struct SettingsSection {
    pub title: Option<&'static str>,
    pub rows: &'static [SettingsRow],
}

pub const SECTIONS: &[SettingsSection] = &[
    SettingsSection {
        title: Some("계정"),
        rows: &[SettingsRow::Account],
    },
    SettingsSection {
        title: Some("앱 설정"),
        rows: &[SettingsRow::SmsRecognition, SettingsRow::ErrorReport],
    },
    SettingsSection {
        title: Some("소비 성향 테스트"),
        rows: &[SettingsRow::RetakeQuiz],
    },
    SettingsSection {
        title: Some("데이터"),
        rows: &[SettingsRow::ResetData],
    },
    SettingsSection {
        title: None,
        rows: &[SettingsRow::Version],
    },
    SettingsSection {
        title: None,
        rows: &[SettingsRow::Withdraw],
    },
];

/// Rows the cursor can land on, in page order.
pub fn selectable_rows() -> impl Iterator<Item = SettingsRow> {
    SECTIONS
        .iter()
        .flat_map(|section| section.rows.iter().copied())
        .filter(|row| row.is_selectable())
}

/// Cursor over the selectable rows.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    cursor: usize,
}

impl SettingsState {
    pub fn selected(&self) -> SettingsRow {
        selectable_rows()
            .nth(self.cursor)
            .unwrap_or(SettingsRow::Account)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = selectable_rows().count().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_last(&mut self) {
        self.cursor = selectable_rows().count().saturating_sub(1);
    }
}
