//! Character variety section - checks for lowercase, uppercase, digits, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Awards a point for each character class present in the password.
///
/// Classes are ASCII lowercase, ASCII uppercase, ASCII digits, and
/// anything else (punctuation, whitespace, non-ASCII).
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count() as u8
}
