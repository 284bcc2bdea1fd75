//! Sign-in form state and per-field validation tracks

use super::field::FormField;
use crate::account::SignInRequest;
use crate::state::LanguagePack;
use crate::validation::{
    classify_identifier, validate_email, validate_password, validate_phone, IdentifierKind,
};

/// Classified identifier draft. Only one shape is ever held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identifier {
    #[default]
    Empty,
    Phone(String),
    Email(String),
}

impl Identifier {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match classify_identifier(raw) {
            IdentifierKind::Phone => Self::Phone(raw.to_string()),
            IdentifierKind::Email => Self::Email(raw.to_string()),
        }
    }

    pub fn kind(&self) -> Option<IdentifierKind> {
        match self {
            Self::Empty => None,
            Self::Phone(_) => Some(IdentifierKind::Phone),
            Self::Email(_) => Some(IdentifierKind::Email),
        }
    }
}

/// Validation state of the identifier field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierTrack {
    #[default]
    Empty,
    InvalidPhone,
    InvalidEmail,
    Valid,
}

/// Validation state of the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordTrack {
    #[default]
    Empty,
    TooShort,
    Valid,
}

/// Focusable elements of the sign-in card, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Identifier,
    Password,
    SubmitButton,
    ForgotLink,
    CreateLink,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Identifier,
        Focus::Password,
        Focus::SubmitButton,
        Focus::ForgotLink,
        Focus::CreateLink,
    ];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Draft values of the sign-in card
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub identifier_field: FormField,
    pub password_field: FormField,
    identifier: Identifier,
    identifier_track: IdentifierTrack,
    password_track: PasswordTrack,
    pub identifier_error: Option<String>,
    pub password_error: Option<String>,
    pub focus: Focus,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            identifier_field: FormField::text(),
            password_field: FormField::secret(),
            identifier: Identifier::Empty,
            identifier_track: IdentifierTrack::Empty,
            password_track: PasswordTrack::Empty,
            identifier_error: None,
            password_error: None,
            focus: Focus::Identifier,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn identifier_track(&self) -> IdentifierTrack {
        self.identifier_track
    }

    pub fn password_track(&self) -> PasswordTrack {
        self.password_track
    }

    /// Both tracks are valid
    pub fn is_complete(&self) -> bool {
        self.identifier_track == IdentifierTrack::Valid && self.password_track == PasswordTrack::Valid
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Replace the identifier draft and re-run classification and validation
    pub fn set_identifier(&mut self, raw: &str, pack: &LanguagePack) {
        self.identifier_field.set_text(raw.to_string());
        self.validate_identifier(pack);
    }

    /// Replace the password draft and re-run validation
    pub fn set_password(&mut self, raw: &str, pack: &LanguagePack) {
        self.password_field.set_text(raw.to_string());
        self.validate_password(pack);
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char, pack: &LanguagePack) {
        match self.focus {
            Focus::Identifier => {
                self.identifier_field.push_char(c);
                self.validate_identifier(pack);
            }
            Focus::Password => {
                self.password_field.push_char(c);
                self.validate_password(pack);
            }
            _ => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self, pack: &LanguagePack) {
        match self.focus {
            Focus::Identifier => {
                self.identifier_field.pop_char();
                self.validate_identifier(pack);
            }
            Focus::Password => {
                self.password_field.pop_char();
                self.validate_password(pack);
            }
            _ => {}
        }
    }

    /// Re-render messages of both fields, e.g. after a language switch.
    /// Track states are language independent and come out unchanged.
    pub fn revalidate(&mut self, pack: &LanguagePack) {
        self.validate_identifier(pack);
        self.validate_password(pack);
    }

    /// Request body for the account service, if both tracks are valid
    pub fn sign_in_request(&self) -> Option<SignInRequest> {
        if !self.is_complete() {
            return None;
        }
        let password = self.password_field.as_text().to_string();
        match &self.identifier {
            Identifier::Email(email) => Some(SignInRequest::Email {
                email: email.clone(),
                password,
            }),
            Identifier::Phone(number) => Some(SignInRequest::Phone {
                number: number.clone(),
                password,
            }),
            Identifier::Empty => None,
        }
    }

    fn validate_identifier(&mut self, pack: &LanguagePack) {
        self.identifier = Identifier::from_raw(self.identifier_field.as_text());
        let (track, result) = match &self.identifier {
            Identifier::Empty => {
                self.identifier_track = IdentifierTrack::Empty;
                self.identifier_error = None;
                return;
            }
            Identifier::Phone(raw) => (IdentifierTrack::InvalidPhone, validate_phone(raw, pack)),
            Identifier::Email(raw) => (IdentifierTrack::InvalidEmail, validate_email(raw, pack)),
        };
        self.identifier_track = if result.valid {
            IdentifierTrack::Valid
        } else {
            track
        };
        self.identifier_error = result.message;
    }

    fn validate_password(&mut self, pack: &LanguagePack) {
        let raw = self.password_field.as_text();
        if raw.is_empty() {
            self.password_track = PasswordTrack::Empty;
            self.password_error = None;
            return;
        }
        let result = validate_password(raw, pack);
        self.password_track = if result.valid {
            PasswordTrack::Valid
        } else {
            PasswordTrack::TooShort
        };
        self.password_error = result.message;
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}
