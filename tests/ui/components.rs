use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wishmaker::logger::Logger;
use wishmaker::presenter::{DisplaySurface, EventListPresenter};
use wishmaker::source::InMemoryEventSource;
use wishmaker::ui::components::{DialogComponent, EventListComponent, NavigationBarComponent};
use wishmaker::ui::core::{Action, Component, DialogType};
use wishmaker::EventDraft;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_list(source: &mut InMemoryEventSource) -> EventListComponent {
    let mut list = EventListComponent::new(Logger::new(), true);
    EventListPresenter::new(source).refresh(&mut list);
    list
}

#[test]
fn test_event_list_reload_copies_rows() {
    let mut source = InMemoryEventSource::with_sample_events();
    let list = loaded_list(&mut source);

    let titles: Vec<&str> = list.rows().iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["Fly to Maldives", "Learn guitar"]);
    assert_eq!(list.rows()[0].dates, "Start date → End Date");
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_event_list_selection_wraps_and_clamps() {
    let mut source = InMemoryEventSource::with_sample_events();
    let mut list = loaded_list(&mut source);

    let action = list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(action, Action::PreviousEvent);
    assert_eq!(list.update(action), Action::None);
    assert_eq!(list.selected_index(), Some(1));

    // Removing the selected last row moves the selection up
    EventListPresenter::new(&mut source).delete(1).unwrap();
    EventListPresenter::new(&mut source).refresh(&mut list);
    assert_eq!(list.selected_index(), Some(0));
}

#[test]
fn test_event_list_delete_and_tap_keys() {
    let mut source = InMemoryEventSource::with_sample_events();
    let mut list = loaded_list(&mut source);

    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::RequestDelete(0));
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::ShowEventDetails(0));
}

#[test]
fn test_empty_event_list_ignores_delete() {
    let mut source = InMemoryEventSource::new();
    let mut list = loaded_list(&mut source);

    assert_eq!(list.selected_index(), None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
}

#[test]
fn test_event_list_as_display_surface() {
    let mut source = InMemoryEventSource::new();
    let mut list = EventListComponent::new(Logger::new(), false);
    list.reload_data(&EventListPresenter::detached());
    assert!(list.rows().is_empty());

    let id = source.add(EventDraft::new("Learn guitar")).unwrap();
    list.reload_data(&EventListPresenter::new(&mut source));
    assert_eq!(list.rows()[0].id, id);
}

#[test]
fn test_navigation_bar_signals() {
    let mut nav = NavigationBarComponent::new();
    assert_eq!(nav.handle_key_events(key(KeyCode::Esc)), Action::GoBack);
    assert_eq!(nav.handle_key_events(key(KeyCode::Char('b'))), Action::GoBack);
    assert_eq!(nav.handle_key_events(key(KeyCode::Char('a'))), Action::AddNew);
    assert_eq!(nav.handle_key_events(key(KeyCode::Char('+'))), Action::AddNew);
    assert_eq!(nav.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_creation_form_builds_draft() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.show(DialogType::EventCreation);

    for c in "Surf".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    dialog.handle_key_events(key(KeyCode::Tab));
    for c in "big waves".chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(dialog.form().focused_field(), 1);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::CreateEvent(EventDraft::new("Surf").description("big waves"))
    );
}

#[test]
fn test_creation_form_requires_title() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.show(DialogType::EventCreation);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(dialog.form().error().is_some());
    assert!(dialog.is_visible());
}

#[test]
fn test_creation_form_ignores_modified_chars() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.show(DialogType::EventCreation);

    dialog.handle_key_events(key(KeyCode::Char('S')));
    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT));

    assert_eq!(dialog.form().value(0), "S!");
}

#[test]
fn test_event_list_reload_key() {
    let mut source = InMemoryEventSource::with_sample_events();
    let mut list = loaded_list(&mut source);

    assert_eq!(list.handle_key_events(key(KeyCode::Char('r'))), Action::RefreshData);
}

#[test]
fn test_delete_confirmation_keys() {
    let mut dialog = DialogComponent::new(Logger::new());
    dialog.show(DialogType::DeleteConfirmation {
        index: 3,
        title: "Learn guitar".to_string(),
    });

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::ConfirmDelete(3));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
}
