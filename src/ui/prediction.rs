//! Predicted price panel

use crate::app::App;
use crate::format::format_to_indian_system;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the result panel; nothing is drawn until a non-zero price arrives
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(price) = app.state.visible_price() else {
        return;
    };

    let paragraph = Paragraph::new(format_to_indian_system(price))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Predicted Price: ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(paragraph, area);
}
