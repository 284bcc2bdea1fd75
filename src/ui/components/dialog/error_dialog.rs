//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{LanguagePack, Palette};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(
    frame: &mut Frame,
    error_message: &str,
    pack: &LanguagePack,
    palette: &Palette,
) {
    let key_style = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::styled(" / ", Style::default().fg(palette.label_text)),
        Span::styled("Esc", key_style),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: pack.error_title,
            title_color: Color::Red,
            border_color: Color::Red,
            background: palette.card,
            text_color: palette.text,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
