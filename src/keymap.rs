//! Keyboard shortcuts and their display labels

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shortcut display strings for the help line
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
pub const THEME_SHORTCUT: &str = "Ctrl+T";
pub const LANGUAGE_SHORTCUT: &str = "Ctrl+L";
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";

/// Key events the sign-in screen reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextField,
    PrevField,
    Submit,
    Confirm,
    ToggleTheme,
    ToggleLanguage,
    SelectEnglish,
    SelectKorean,
    ToggleReveal,
    OpenHelp,
    OpenPrivacy,
    OpenTerms,
    Input(char),
    Backspace,
    Dismiss,
}

/// Map a key event to an action
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    // AltGr arrives as Ctrl+Alt on Windows and produces ordinary text
    let alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !alt_gr;
    let alt = key.modifiers.contains(KeyModifiers::ALT) && !alt_gr;
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('s') if ctrl => Some(Action::Submit),
        KeyCode::Char('t') if ctrl => Some(Action::ToggleTheme),
        KeyCode::Char('l') if ctrl => Some(Action::ToggleLanguage),
        KeyCode::Char('p') if ctrl => Some(Action::ToggleReveal),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::F(1) => Some(Action::SelectEnglish),
        KeyCode::F(2) => Some(Action::SelectKorean),
        KeyCode::F(3) => Some(Action::OpenHelp),
        KeyCode::F(4) => Some(Action::OpenPrivacy),
        KeyCode::F(5) => Some(Action::OpenTerms),
        _ => None,
    }
}
