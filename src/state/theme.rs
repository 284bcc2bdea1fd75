//! Light and dark colour palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Active colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Glyph for the toggle: a moon offers dark mode, a sun offers light mode
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Semantic colour roles used by the sign-in card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub background: Color,
    pub card: Color,
    pub primary: Color,
    pub secondary: Color,
    pub label_text: Color,
    pub input_border: Color,
    pub card_shadow: Color,
}

// Translucent roles (label text, borders, shadow) have no alpha in a terminal,
// so they are pre-blended against the card colour.
pub static LIGHT: Palette = Palette {
    text: Color::Rgb(0x00, 0x00, 0x00),
    background: Color::Rgb(0xf5, 0xf5, 0xf5),
    card: Color::Rgb(0xfa, 0xfa, 0xfa),
    primary: Color::Rgb(0x33, 0x79, 0xce),
    secondary: Color::Rgb(0x17, 0x37, 0x7b),
    label_text: Color::Rgb(0x7d, 0x7d, 0x7d),
    input_border: Color::Rgb(0xbb, 0xbb, 0xbb),
    card_shadow: Color::Rgb(0xe1, 0xe1, 0xe1),
};

pub static DARK: Palette = Palette {
    text: Color::Rgb(0xff, 0xff, 0xff),
    background: Color::Rgb(0x27, 0x27, 0x27),
    card: Color::Rgb(0x21, 0x21, 0x21),
    primary: Color::Rgb(0x33, 0x79, 0xce),
    secondary: Color::Rgb(0x77, 0xb0, 0xf4),
    label_text: Color::Rgb(0x90, 0x90, 0x90),
    input_border: Color::Rgb(0x58, 0x58, 0x58),
    card_shadow: Color::Rgb(0x37, 0x37, 0x37),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_primary_shared_between_palettes() {
        assert_eq!(LIGHT.primary, DARK.primary);
        assert_ne!(LIGHT.text, DARK.text);
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Theme::Dark.palette().background, Color::Rgb(0x27, 0x27, 0x27));
        assert_eq!(Theme::Light.palette().card, Color::Rgb(0xfa, 0xfa, 0xfa));
    }

    #[test]
    fn test_toggle_icon() {
        assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
    }
}
