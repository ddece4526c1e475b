//! Car price form rendering

use super::field_renderer::{draw_input_field, draw_select_field};
use crate::app::App;
use crate::state::{FieldKind, FieldName};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields per column
const FIELDS_PER_COLUMN: usize = 5;

/// Height of one bordered field
const FIELD_HEIGHT: u16 = 3;

/// Draw the ten form fields in two columns
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    // Form is focused when not on the submit button
    let form_focused = !app.state.form.is_submit_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Car Price Prediction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (column, fields) in columns.iter().zip(FieldName::ALL.chunks(FIELDS_PER_COLUMN)) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                fields
                    .iter()
                    .map(|_| Constraint::Length(FIELD_HEIGHT))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(*column);

        for (row, field) in rows.iter().zip(fields) {
            draw_form_field(frame, *row, app, *field);
        }
    }
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let is_active = app.state.form.active_field_name() == Some(field);
    match field.kind() {
        FieldKind::Select { .. } => draw_select_field(
            frame,
            area,
            field.label(),
            &app.state.select_choices(field),
            app.state.selected_option(field),
            is_active,
        ),
        FieldKind::Number => draw_input_field(
            frame,
            area,
            field.label(),
            app.state.form.data.get(field),
            is_active,
        ),
    }
}
