//! SMS-recognition preference.
//!
//! Controls how incoming transaction notifications become ledger entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsOption {
    /// Register recognized messages immediately.
    #[default]
    Direct,
    /// Show recognized messages and let the user pick which to register.
    Select,
    /// Do not recognize messages.
    Disable,
}

impl SmsOption {
    /// Returns all options in display order.
    pub fn all() -> &'static [SmsOption] {
        &[SmsOption::Direct, SmsOption::Select, SmsOption::Disable]
    }

    /// Whether recognition is on (the main-list checkbox).
    pub fn is_enabled(self) -> bool {
        self != SmsOption::Disable
    }

    /// Checkbox shortcut: off goes back to the default, anything else turns off.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_enabled() {
            SmsOption::Disable
        } else {
            SmsOption::default()
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SmsOption::Direct => "direct",
            SmsOption::Select => "select",
            SmsOption::Disable => "disable",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SmsOption::Direct => "바로등록",
            SmsOption::Select => "확인 후 선택등록",
            SmsOption::Disable => "사용하지 않기",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SmsOption::Direct => "문자 인식과 동시에 가계부에 입력됩니다.",
            SmsOption::Select => {
                "앱이 인식한 문자 목록을 확인하고, 원하는 내역만 선택하여 등록할 수 있습니다."
            }
            SmsOption::Disable => "문자 인식 기능을 사용하지 않습니다.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_direct() {
        assert_eq!(SmsOption::default(), SmsOption::Direct);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SmsOption::Disable.toggled(), SmsOption::Direct);
        assert_eq!(SmsOption::Direct.toggled(), SmsOption::Disable);
        assert_eq!(SmsOption::Select.toggled(), SmsOption::Disable);
    }

    #[test]
    fn test_is_enabled_matches_checkbox() {
        assert!(SmsOption::Direct.is_enabled());
        assert!(SmsOption::Select.is_enabled());
        assert!(!SmsOption::Disable.is_enabled());
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        for option in SmsOption::all() {
            let json = serde_json::to_string(option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.key()));
        }
    }
}
