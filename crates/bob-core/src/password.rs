//! Password policy.

use std::sync::LazyLock;

use regex::Regex;

/// Symbols accepted (and one of which is required) in a password.
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 15;

/// Allowed alphabet and length. The class requirements are checked separately
/// because the regex crate has no lookahead.
static PASSWORD_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[A-Za-z0-9@$!%*#?&]{{{MIN_PASSWORD_LEN},{MAX_PASSWORD_LEN}}}$"
    ))
    .expect("password charset regex is valid")
});

/// Returns true if `candidate` satisfies the password policy:
/// 8 to 15 characters drawn from ASCII letters, digits and `@$!%*#?&`,
/// with at least one of each class.
pub fn validate_password(candidate: &str) -> bool {
    PASSWORD_CHARSET.is_match(candidate)
        && candidate.chars().any(|c| c.is_ascii_alphabetic())
        && candidate.chars().any(|c| c.is_ascii_digit())
        && candidate.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
