//! Sign-in card rendering

use super::field_renderer::{draw_field, draw_field_error, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Focus, Palette};
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use crate::validation::IdentifierKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Total rows of the card including borders
pub const CARD_HEIGHT: u16 = 20;
/// Preferred card width
pub const CARD_WIDTH: u16 = 60;

const LOGO_COLOR: Color = Color::Rgb(0xff, 0xbf, 0x00);
const SUBMIT_WIDTH: u16 = 16;

/// Draw the sign-in card into `area`
pub fn draw_sign_in(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();
    let pack = app.state.pack();
    let form = &app.state.form;

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.card_shadow))
        .style(Style::default().bg(palette.card));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Logo
            Constraint::Length(1),             // Spacer
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Identifier
            Constraint::Length(1),             // Identifier error
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(BUTTON_HEIGHT), // Forgot + submit
            Constraint::Length(1),             // Create account
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("★ ", Style::default().fg(LOGO_COLOR)),
            Span::styled(
                "KidsLoop",
                Style::default().fg(LOGO_COLOR).add_modifier(Modifier::BOLD),
            ),
        ])),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            pack.sign_in,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );

    let identifier_placeholder = match form.identifier().kind() {
        Some(IdentifierKind::Phone) => format!("☎ {}", pack.contact),
        Some(IdentifierKind::Email) => format!("✉ {}", pack.contact),
        None => pack.contact.to_string(),
    };
    draw_field(
        frame,
        chunks[4],
        &form.identifier_field,
        &identifier_placeholder,
        form.focus == Focus::Identifier,
        form.identifier_error.is_some(),
        palette,
    );
    draw_field_error(frame, chunks[5], form.identifier_error.as_deref());

    draw_field(
        frame,
        chunks[6],
        &form.password_field,
        pack.password,
        form.focus == Focus::Password,
        form.password_error.is_some(),
        palette,
    );
    draw_field_error(frame, chunks[7], form.password_error.as_deref());

    draw_action_row(frame, chunks[8], app);

    frame.render_widget(
        Paragraph::new(link_span(
            pack.create,
            form.focus == Focus::CreateLink,
            palette,
        )),
        chunks[9],
    );
}

/// Forgot-password link on the left, submit button on the right
fn draw_action_row(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();
    let pack = app.state.pack();
    let focus = app.state.form.focus;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SUBMIT_WIDTH)])
        .split(area);

    // Vertically align the link with the button label
    let link_area = if cols[0].height > 1 {
        Rect {
            y: cols[0].y + 1,
            height: 1,
            ..cols[0]
        }
    } else {
        cols[0]
    };
    frame.render_widget(
        Paragraph::new(link_span(pack.forgot, focus == Focus::ForgotLink, palette)),
        link_area,
    );

    let state = if app.state.is_submitting() {
        ButtonState::Loading { tick: app.tick }
    } else if app.state.can_submit() {
        ButtonState::Enabled
    } else {
        ButtonState::Disabled
    };
    render_button(
        frame,
        cols[1],
        pack.sign,
        state,
        focus == Focus::SubmitButton,
        palette,
    );
}

fn link_span<'a>(label: &'a str, is_active: bool, palette: &Palette) -> Span<'a> {
    let mut style = Style::default().fg(palette.secondary);
    if is_active {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    Span::styled(label, style)
}

/// Centered rect for the card within the content area
pub fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
