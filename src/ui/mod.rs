//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    layout::draw_background(frame, app);

    let (content_area, footer_area, status_area) = layout::create_layout(frame.area());

    forms::draw_sign_in(frame, forms::card_area(content_area), app);
    layout::draw_footer(frame, footer_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.pack(), app.state.palette());
    }
}
