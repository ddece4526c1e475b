//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod prediction;

use crate::app::App;
use components::render_button;
use ratatui::{layout::Rect, Frame};

/// Width of the "Predict Price" button
const BUTTON_WIDTH: u16 = 24;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    forms::draw_form(frame, screen.form, app);

    let button_area = centered(screen.button, BUTTON_WIDTH);
    render_button(
        frame,
        button_area,
        "Predict Price",
        app.state.form.is_submit_active(),
    );

    prediction::draw(frame, screen.result, app);

    layout::draw_status_bar(frame, screen.status, app);
}

/// Horizontally center a box of the given width inside `area`
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
