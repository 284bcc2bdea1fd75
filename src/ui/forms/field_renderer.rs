//! Field rendering utilities for forms

use crate::state::{FormField, Palette};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a text field. The placeholder is shown while the field is empty;
/// a field with an error gets a red border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    placeholder: &str,
    is_active: bool,
    has_error: bool,
    palette: &Palette,
) {
    let border_color = if has_error {
        Color::Red
    } else if is_active {
        palette.primary
    } else {
        palette.input_border
    };

    let cursor = if is_active { "▌" } else { "" };

    let line = if field.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(palette.primary)),
            Span::styled(placeholder, Style::default().fg(palette.label_text)),
        ])
    } else {
        Line::from(vec![
            Span::styled(field.display_value(), Style::default().fg(palette.text)),
            Span::styled(cursor, Style::default().fg(palette.primary)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the inline validation message under a field, if any
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(paragraph, area);
    }
}
