use crate::config::Config;
use crate::constants::{
    ERROR_EVENT_CREATE_FAILED, ERROR_EVENT_DELETE_FAILED, SUCCESS_EVENT_CREATED, SUCCESS_EVENT_DELETED,
};
use crate::logger::Logger;
use crate::presenter::EventListPresenter;
use crate::source::InMemoryEventSource;
use crate::ui::components::{DialogComponent, EventListComponent, NavigationBarComponent, StatusBar};
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crate::utils::date;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// The wish calendar screen.
///
/// Owns the data source and every component. Each action that touches the
/// list builds a short-lived presenter over the source, applies itself, and
/// asks the event list to reload from that presenter.
pub struct AppComponent {
    // Component composition
    navigation_bar: NavigationBarComponent,
    event_list: EventListComponent,
    dialog: DialogComponent,

    // Data owner
    source: InMemoryEventSource,

    config: Config,
    logger: Logger,

    status_message: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let source = if config.events.seed_sample_events {
            InMemoryEventSource::with_sample_events()
        } else {
            InMemoryEventSource::new()
        };
        Self::with_source(config, logger, source)
    }

    pub fn with_source(config: Config, logger: Logger, source: InMemoryEventSource) -> Self {
        let mut app = Self {
            navigation_bar: NavigationBarComponent::new(),
            event_list: EventListComponent::new(logger.clone(), config.ui.show_descriptions),
            dialog: DialogComponent::new(logger.clone()),
            source,
            config,
            logger,
            status_message: None,
            should_quit: false,
        };
        app.refresh_list();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn event_count(&self) -> usize {
        self.source.len()
    }

    pub fn source(&self) -> &InMemoryEventSource {
        &self.source
    }

    pub fn event_list(&self) -> &EventListComponent {
        &self.event_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Re-pull the list through a presenter and redraw it
    fn refresh_list(&mut self) {
        let presenter = EventListPresenter::new(&mut self.source).with_delete_policy(self.config.events.delete_policy);
        presenter.refresh(&mut self.event_list);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Apply `action` and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while next != Action::None {
            next = self.update(next);
        }
    }

    fn delete_event(&mut self, index: usize) -> Action {
        self.dialog.hide();

        let result = {
            let mut presenter =
                EventListPresenter::new(&mut self.source).with_delete_policy(self.config.events.delete_policy);
            let result = presenter.delete(index);
            presenter.refresh(&mut self.event_list);
            result
        };

        match result {
            Ok(Some(record)) => {
                self.logger
                    .log(format!("Event: Deleted '{}' (ID: {}) at index {}", record.title, record.id, index));
                self.status_message = Some(SUCCESS_EVENT_DELETED.to_string());
                Action::None
            }
            Ok(None) => {
                self.logger.log(format!("Event: Nothing to delete at index {}", index));
                Action::None
            }
            Err(e) => {
                self.logger.log(format!("Event: Delete failed: {}", e));
                self.status_message = Some(ERROR_EVENT_DELETE_FAILED.to_string());
                Action::ShowDialog(DialogType::Error(format!("{}: {}", ERROR_EVENT_DELETE_FAILED, e)))
            }
        }
    }

    fn event_details(&mut self, index: usize) -> Action {
        let presenter = EventListPresenter::new(&mut self.source);
        match presenter.record_at(index) {
            Ok(record) => {
                let mut details = record.title.clone();
                if record.has_description() {
                    details.push_str(&format!("\n\n{}", record.description));
                }
                let dates = date::format_range(&record.start_date, &record.end_date);
                if !dates.is_empty() {
                    details.push_str(&format!("\n\n📅 {}", dates));
                }
                Action::ShowDialog(DialogType::Info(details))
            }
            Err(e) => Action::ShowDialog(DialogType::Error(e.to_string())),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Open dialogs capture every other key
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        self.status_message = None;

        let action = self.handle_global_key(key);
        if action != Action::None {
            return action;
        }

        let action = self.navigation_bar.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        self.event_list.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        self.event_list.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::GoBack => {
                self.logger.log("Navigation: Leaving wish calendar".to_string());
                self.should_quit = true;
                Action::None
            }
            Action::AddNew => {
                self.logger.log("Navigation: Add wish requested".to_string());
                Action::ShowDialog(DialogType::EventCreation)
            }
            Action::NextEvent | Action::PreviousEvent => self.event_list.update(action),
            Action::RefreshData => {
                self.logger.log("Event: Reloading list".to_string());
                self.refresh_list();
                Action::None
            }
            Action::ShowEventDetails(index) => self.event_details(index),
            Action::RequestDelete(index) => {
                if self.config.ui.confirm_delete {
                    let title = EventListPresenter::new(&mut self.source).record_or_placeholder(index).title;
                    Action::ShowDialog(DialogType::DeleteConfirmation { index, title })
                } else {
                    Action::ConfirmDelete(index)
                }
            }
            Action::ConfirmDelete(index) => self.delete_event(index),
            Action::CreateEvent(draft) => match self.source.add(draft) {
                Ok(id) => {
                    self.logger.log(format!("Event: Created wish with ID {}", id));
                    self.dialog.hide();
                    self.refresh_list();
                    self.event_list.select_id(id);
                    self.status_message = Some(SUCCESS_EVENT_CREATED.to_string());
                    Action::None
                }
                Err(e) => {
                    self.logger.log(format!("Event: Create failed: {}", e));
                    self.dialog.set_form_error(format!("{}: {}", ERROR_EVENT_CREATE_FAILED, e));
                    Action::None
                }
            },
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                self.dialog.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.dialog.hide();
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        self.navigation_bar.render(f, layout.navigation);
        self.event_list.render(f, layout.list);
        StatusBar::render(f, layout.status, self.source.len(), self.status_message.as_deref());

        // Dialogs last so they sit on top
        self.dialog.render(f, rect);
    }
}
