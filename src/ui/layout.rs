//! Layout components (background, footer, status bar)

use crate::app::App;
use crate::keymap::{LANGUAGE_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::Language;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Split the screen into content, footer and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Paint the whole screen with the palette background
pub fn draw_background(frame: &mut Frame, app: &App) {
    let palette = app.state.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );
}

/// Draw the footer: theme toggle, language chooser, help/privacy/terms links
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();
    let pack = app.state.pack();
    let link = Style::default().fg(palette.secondary);
    let muted = Style::default().fg(palette.label_text);

    let mut spans = vec![
        Span::styled(app.state.theme.toggle_icon(), link),
        Span::raw("   "),
        Span::styled(format!("{}: ", pack.select), muted),
    ];
    for (key, language) in [("F1", Language::En), ("F2", Language::Ko)] {
        let style = if app.state.language == language {
            link.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            link
        };
        spans.push(Span::styled(format!("{key} "), muted));
        spans.push(Span::styled(language.label(), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    for (key, label) in [("F3", pack.help), ("F4", pack.privacy), ("F5", pack.terms)] {
        spans.push(Span::styled(format!("{key} "), muted));
        spans.push(Span::styled(label, link));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Draw the status bar: last notice, or the shortcut help line
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();
    let pack = app.state.pack();

    let line = match &app.state.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            format!(
                "Tab: {}  {SUBMIT_SHORTCUT}: {}  {REVEAL_SHORTCUT}: {}  \
                 {THEME_SHORTCUT}: {}  {LANGUAGE_SHORTCUT}: {}  Esc: {}",
                pack.hint_next,
                pack.sign_in,
                pack.hint_reveal,
                pack.hint_theme,
                pack.hint_language,
                pack.hint_quit,
            ),
            Style::default().fg(palette.label_text),
        )),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
