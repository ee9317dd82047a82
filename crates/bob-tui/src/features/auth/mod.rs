//! Auth feature slice.
//!
//! Login result handling, logout, and the account overlay view.
//! User-facing messages live here so overlay handlers and the reducer agree.

mod render;
mod update;

pub use render::render_account_overlay;
pub use update::{handle_login_result, login_error_message, logout};

pub const LOGIN_EMPTY_FIELDS: &str = "이메일과 비밀번호를 모두 입력해주세요.";
pub const LOGIN_REJECTED: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";
pub const LOGIN_FAILED: &str = "로그인 중 오류가 발생했습니다. 다시 시도해주세요.";
pub const LOGIN_IN_FLIGHT: &str = "로그인 중입니다...";
pub const PASSWORD_POLICY: &str = "문자, 숫자, 특수기호 혼합 8~15자로 입력하세요.";
pub const PASSWORD_CHANGED: &str = "비밀번호가 변경되었습니다.";
