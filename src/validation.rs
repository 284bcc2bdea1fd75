//! Identifier and password validation
//!
//! Pure functions over the raw input and the active label table. Failure
//! messages are taken from the [`LanguagePack`] so the caller can show them
//! inline without further lookup.

use crate::state::LanguagePack;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").expect("phone shape pattern"));

// No leading zero, 8-15 digits, optional leading '+'. The zero check applies to
// the first character only, so "+0..." is accepted.
static PHONE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+[0-9]{8,15}|[1-9][0-9]{7,14})$").expect("phone format pattern")
});

static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email format pattern"));

/// Shape of a non-empty identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Phone,
    Email,
}

/// Outcome of a single validation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: Some(message.to_string()),
        }
    }

    fn check(valid: bool, message: &str) -> Self {
        if valid {
            Self::ok()
        } else {
            Self::fail(message)
        }
    }
}

/// Anything made only of digits (optionally behind a '+') is treated as a phone number
pub fn classify_identifier(raw: &str) -> IdentifierKind {
    if PHONE_SHAPE.is_match(raw) {
        IdentifierKind::Phone
    } else {
        IdentifierKind::Email
    }
}

pub fn validate_phone(raw: &str, pack: &LanguagePack) -> ValidationResult {
    ValidationResult::check(PHONE_FORMAT.is_match(raw), pack.phone_validation)
}

pub fn validate_email(raw: &str, pack: &LanguagePack) -> ValidationResult {
    ValidationResult::check(
        EMAIL_FORMAT.is_match(&raw.to_lowercase()),
        pack.email_validation,
    )
}

pub fn validate_password(raw: &str, pack: &LanguagePack) -> ValidationResult {
    ValidationResult::check(
        raw.chars().count() >= MIN_PASSWORD_LEN,
        pack.password_validation,
    )
}
