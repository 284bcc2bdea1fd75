//! Button component for TUI

use crate::state::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Frames of the loading spinner
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    /// Action in progress; the label is replaced by a spinner
    Loading { tick: usize },
}

/// Render a filled primary button with rounded border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    state: ButtonState,
    is_selected: bool,
    palette: &Palette,
) {
    let (content, text_style) = match state {
        ButtonState::Enabled => (
            label.to_string(),
            Style::default()
                .fg(palette.card)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        ButtonState::Disabled => (
            label.to_string(),
            Style::default().fg(palette.text).bg(palette.card_shadow),
        ),
        ButtonState::Loading { tick } => (
            SPINNER[tick % SPINNER.len()].to_string(),
            Style::default().fg(palette.card).bg(palette.primary),
        ),
    };

    let border_style = if is_selected {
        Style::default().fg(palette.secondary)
    } else {
        Style::default().fg(palette.input_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(text_style);

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);

    frame.render_widget(paragraph.block(block), area);
}
