//! Navigation bar: a back affordance on the left, an add affordance on the right.
//!
//! Both are payload-free signals; what "back" and "add" mean is decided by the
//! app component.

use crate::constants::{APP_TITLE, NAV_ADD_LABEL, NAV_BACK_LABEL};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct NavigationBarComponent;

impl NavigationBarComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for NavigationBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Left => Action::GoBack,
            KeyCode::Char('a') | KeyCode::Char('+') => Action::AddNew,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(APP_TITLE)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let button = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        f.render_widget(
            Paragraph::new(format!("{NAV_BACK_LABEL} (b)")).style(button).alignment(Alignment::Left),
            halves[0],
        );
        f.render_widget(
            Paragraph::new(format!("{NAV_ADD_LABEL} (a)")).style(button).alignment(Alignment::Right),
            halves[1],
        );
    }
}
