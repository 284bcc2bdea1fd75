//! Form domain layer
//!
//! Type-safe state for the sign-in card: field values, the classified
//! identifier draft and the per-field validation tracks.

mod field;
mod sign_in_form;

pub use field::FormField;
pub use sign_in_form::{Focus, Identifier, IdentifierTrack, PasswordTrack, SignInForm};
