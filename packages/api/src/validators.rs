//! Form field validators shared by registration, login and profile edits.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid email regex"));

/// Symbols that satisfy the "special character" password rule.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub const MIN_PASSWORD_LEN: usize = 8;

/// True for a missing value or one that is empty after trimming whitespace.
/// A byte order mark counts as whitespace, as in browser string trimming.
pub fn is_empty<'a>(input: impl Into<Option<&'a str>>) -> bool {
    input.into().map_or(true, |s| {
        s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty()
    })
}

/// `local@domain.tld` with a top-level part of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight characters on a single line, with an ASCII letter, an ASCII
/// digit and one of [`PASSWORD_SYMBOLS`].
pub fn is_valid_password(password: &str) -> bool {
    // Length is measured in UTF-16 units, the way browser form fields count.
    let long_enough = password.encode_utf16().count() >= MIN_PASSWORD_LEN;
    let single_line = !password
        .chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'));
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    long_enough && single_line && has_letter && has_digit && has_symbol
}

/// The confirmation field must repeat the password exactly.
pub fn is_valid_password_chk(password1: &str, password2: &str) -> bool {
    password1 == password2
}
