use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that turns input into [`Action`]s and draws itself.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Mouse input only arrives when `ui.mouse_enabled` is set
    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// Apply an action; whatever this component does not consume is returned
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
