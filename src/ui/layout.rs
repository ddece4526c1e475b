//! Layout components (form area, result panel, status bar)

use crate::app::App;
use crate::state::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the single form view
pub struct ScreenLayout {
    pub form: Rect,
    pub button: Rect,
    pub result: Rect,
    pub status: Rect,
}

/// Split the terminal into form, button row, result panel and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form fields
            Constraint::Length(3), // Predict button
            Constraint::Length(3), // Result panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        form: chunks[0],
        button: chunks[1],
        result: chunks[2],
        status: chunks[3],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Reference data status
    let load_status = if app.state.is_ready() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(load_status);

    spans.push(Span::styled(
        get_field_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let quit_hint = " Esc:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused field
fn get_field_hints(app: &App) -> String {
    let field_hint = match app.state.form.active_field_name().map(|f| f.kind()) {
        Some(FieldKind::Select { .. }) => "←/→:choose",
        Some(FieldKind::Number) => "0-9:type  Bksp:delete",
        None => "Enter:predict",
    };
    format!("Tab/↓:next  ⇧Tab/↑:prev  {field_hint}  ^S:predict")
}
