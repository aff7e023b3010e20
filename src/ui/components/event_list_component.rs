use crate::constants::EMPTY_LIST_MESSAGE;
use crate::entities::EventRecord;
use crate::logger::Logger;
use crate::presenter::{DisplaySurface, EventListPresenter};
use crate::ui::core::{Action, Component};
use crate::utils::date;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render-ready copy of one record, taken during a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub dates: String,
}

impl From<EventRecord> for EventRow {
    fn from(record: EventRecord) -> Self {
        let dates = date::format_range(&record.start_date, &record.end_date);
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            dates,
        }
    }
}

pub struct EventListComponent {
    rows: Vec<EventRow>,
    selected_index: usize,
    list_state: ListState,
    show_descriptions: bool,
    logger: Logger,
}

impl EventListComponent {
    pub fn new(logger: Logger, show_descriptions: bool) -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            show_descriptions,
            logger,
        }
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    pub fn selected_row(&self) -> Option<&EventRow> {
        self.rows.get(self.selected_index)
    }

    /// Move the selection onto the row with `id`, if it is shown
    pub fn select_id(&mut self, id: u64) {
        if let Some(index) = self.rows.iter().position(|row| row.id == id) {
            self.selected_index = index;
            self.update_list_state();
        }
    }

    fn update_list_state(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.rows.len() {
                self.selected_index = self.rows.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.rows.len();
            self.update_list_state();
        }
    }

    fn previous(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.rows.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    fn create_list_items(rows: &[EventRow], show_descriptions: bool) -> Vec<ListItem<'_>> {
        rows.iter()
            .map(|row| {
                let mut lines = vec![Line::from(Span::styled(
                    row.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];

                if show_descriptions && !row.description.trim().is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", row.description),
                        Style::default().fg(Color::Gray),
                    )));
                }

                if !row.dates.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  📅 {}", row.dates),
                        Style::default().fg(Color::Yellow),
                    )));
                }

                ListItem::new(lines)
            })
            .collect()
    }
}

impl DisplaySurface for EventListComponent {
    fn reload_data(&mut self, presenter: &EventListPresenter<'_>) {
        self.rows = (0..presenter.count())
            .map(|index| EventRow::from(presenter.record_or_placeholder(index)))
            .collect();
        self.update_list_state();
    }
}

impl Component for EventListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextEvent,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousEvent,
            KeyCode::Char('r') => Action::RefreshData,
            KeyCode::Delete | KeyCode::Char('d') => match self.selected_index() {
                Some(index) => Action::RequestDelete(index),
                None => Action::None,
            },
            KeyCode::Enter => match self.selected_index() {
                Some(index) => {
                    self.logger.log(format!("cell tapped at index {}", index));
                    Action::ShowEventDetails(index)
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollDown => Action::NextEvent,
            MouseEventKind::ScrollUp => Action::PreviousEvent,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextEvent => {
                self.next();
                Action::None
            }
            Action::PreviousEvent => {
                self.previous();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("Wishes ({})", self.rows.len());
        let block = Block::default().borders(Borders::ALL).title(title);

        if self.rows.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, rect);
            return;
        }

        let list = List::new(Self::create_list_items(&self.rows, self.show_descriptions))
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
