//! Application state definitions

use super::forms::SignInForm;
use super::language::{Language, LanguagePack};
use super::theme::{Palette, Theme};
use std::collections::VecDeque;

/// Lifecycle of a sign-in submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored
    Submitting,
}

/// Inert links on the card and in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Forgot,
    Create,
    Help,
    Privacy,
    Terms,
}

impl LinkTarget {
    pub fn label(&self, pack: &LanguagePack) -> &'static str {
        match self {
            Self::Forgot => pack.forgot,
            Self::Create => pack.create,
            Self::Help => pack.help,
            Self::Privacy => pack.privacy,
            Self::Terms => pack.terms,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Appearance
    pub language: Language,
    pub theme: Theme,

    // Form
    pub form: SignInForm,
    pub submit_state: SubmitState,

    // Feedback
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self {
            language,
            theme,
            ..Default::default()
        }
    }

    pub fn pack(&self) -> &'static LanguagePack {
        self.language.pack()
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    /// Submission is possible: both tracks valid and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.is_submitting()
    }

    /// Switch the label table. Visible error messages are re-rendered in the new language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.form.revalidate(language.pack());
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggle());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Queue an error for the dialog overlay
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
