//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active))
}

/// Draw a numeric input field with a cursor when focused
pub fn draw_input_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(label, is_active)), area);
}

/// Draw a select field showing the current choice
///
/// `choices` lists the placeholder first, then the options. `choice` is
/// `None` when the placeholder is selected.
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    choices: &[&str],
    choice: Option<&str>,
    is_active: bool,
) {
    let placeholder = choices.first().copied().unwrap_or_default();
    let (text, text_style) = match choice {
        Some(value) if is_active => (value, Style::default().fg(Color::Cyan)),
        Some(value) => (value, Style::default()),
        None => (placeholder, Style::default().fg(Color::DarkGray)),
    };

    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(text, text_style));
    if is_active {
        spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
        if choices.len() <= 1 {
            spans.push(Span::styled(
                "  (no options)",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let content = Paragraph::new(Line::from(spans));
    frame.render_widget(content.block(field_block(label, is_active)), area);
}
