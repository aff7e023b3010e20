//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: last outcome if any, otherwise the key hints
    pub fn render(f: &mut Frame, area: Rect, event_count: usize, message: Option<&str>) {
        let (status_text, status_color) = match message {
            Some(message) if message.starts_with('❌') => (message.to_string(), Color::Red),
            Some(message) => (message.to_string(), Color::Green),
            None => (
                format!("{event_count} wish(es) • a: add • d: delete • ?: help • q: quit"),
                Color::Gray,
            ),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
