//! Modal dialogs: wish creation form, delete confirmation, messages, help and logs.

use crate::constants::{DELETE_PREVIEW_MAX_CHARS, DIALOG_TITLE_DEBUG_LOGS};
use crate::entities::EventDraft;
use crate::logger::Logger;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const FORM_LABELS: [&str; 4] = ["Title", "Description", "Start date", "End date"];

/// Input state of the wish creation form
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    fields: [String; 4],
    focused: usize,
    error: Option<String>,
}

impl EventForm {
    pub fn focused_field(&self) -> usize {
        self.focused
    }

    pub fn value(&self, field: usize) -> &str {
        self.fields.get(field).map_or("", String::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    fn focus_previous(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    fn push(&mut self, c: char) {
        self.fields[self.focused].push(c);
        self.error = None;
    }

    fn pop(&mut self) {
        self.fields[self.focused].pop();
    }

    fn to_draft(&self) -> EventDraft {
        let [title, description, start_date, end_date] = self.fields.clone();
        EventDraft {
            title,
            description,
            start_date,
            end_date,
        }
    }
}

pub struct DialogComponent {
    dialog: Option<DialogType>,
    form: EventForm,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog: None,
            form: EventForm::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn current(&self) -> Option<&DialogType> {
        self.dialog.as_ref()
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn show(&mut self, dialog: DialogType) {
        if dialog == DialogType::EventCreation {
            self.form = EventForm::default();
        }
        self.dialog = Some(dialog);
    }

    pub fn hide(&mut self) {
        self.dialog = None;
    }

    /// Surface a rejected submission inside the form
    pub fn set_form_error(&mut self, message: String) {
        self.form.error = Some(message);
    }

    fn handle_form_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_previous();
                Action::None
            }
            KeyCode::Enter => {
                let draft = self.form.to_draft();
                if draft.title.trim().is_empty() {
                    self.form.error = Some("Title is required".to_string());
                    self.form.focused = 0;
                    Action::None
                } else {
                    Action::CreateEvent(draft)
                }
            }
            KeyCode::Backspace => {
                self.form.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.form.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_form(&self, f: &mut Frame) {
        let area = LayoutManager::centered_rect_lines(60, 12, f.area());
        f.render_widget(Clear, area);

        let mut lines = Vec::new();
        for (index, label) in FORM_LABELS.iter().enumerate() {
            let focused = index == self.form.focused;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let cursor = if focused { "█" } else { "" };
            lines.push(Line::from(vec![
                Span::styled(format!("{label:>12}: "), label_style),
                Span::raw(format!("{}{}", self.form.value(index), cursor)),
            ]));
        }
        lines.push(Line::from(""));
        if let Some(error) = &self.form.error {
            lines.push(Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red))));
        }
        lines.push(Line::from(Span::styled(
            "Tab: next field • Enter: save • Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("✨ New Wish")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(form, area);
    }

    fn render_message(f: &mut Frame, title: &str, message: &str, color: Color) {
        let text = format!("{message}\n\nPress Enter or Esc to close");
        Self::render_message_raw(f, title, text, color);
    }

    fn render_delete_confirmation(f: &mut Frame, title: &str) {
        let preview = if title.chars().count() > DELETE_PREVIEW_MAX_CHARS {
            let truncated: String = title.chars().take(DELETE_PREVIEW_MAX_CHARS - 3).collect();
            format!("{truncated}...")
        } else {
            title.to_string()
        };
        let text = format!(
            "Delete wish?\n\n\"{preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
        );
        Self::render_message_raw(f, "⚠️  Confirm Delete", text, Color::Red);
    }

    fn render_message_raw(f: &mut Frame, title: &str, text: String, color: Color) {
        let area = LayoutManager::centered_rect(60, 25, f.area());
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_help(f: &mut Frame) {
        let text = [
            "j / ↓      next wish",
            "k / ↑      previous wish",
            "Enter      show wish details",
            "r          reload wishes",
            "a / +      add a wish",
            "d / Del    delete selected wish",
            "b / Esc    go back (leave)",
            "G          show logs",
            "?          this help",
            "q          quit",
        ]
        .join("\n");
        Self::render_message_raw(f, "❓ Help", text, Color::White);
    }

    fn render_logs(&self, f: &mut Frame) {
        let area = LayoutManager::centered_rect(80, 70, f.area());
        f.render_widget(Clear, area);
        let items: Vec<ListItem> = self.logger.get_logs().into_iter().map(ListItem::new).collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_DEBUG_LOGS),
        );
        f.render_widget(list, area);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog {
            None => Action::None,
            Some(DialogType::EventCreation) => self.handle_form_keys(key),
            Some(DialogType::DeleteConfirmation { index, .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmDelete(*index),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, _rect: Rect) {
        match &self.dialog {
            None => {}
            Some(DialogType::EventCreation) => self.render_form(f),
            Some(DialogType::DeleteConfirmation { title, .. }) => Self::render_delete_confirmation(f, title),
            Some(DialogType::Error(message)) => Self::render_message(f, "❌ Error", message, Color::Red),
            Some(DialogType::Info(message)) => Self::render_message(f, "ℹ️  Info", message, Color::Cyan),
            Some(DialogType::Help) => Self::render_help(f),
            Some(DialogType::Logs) => self.render_logs(f),
        }
    }
}
