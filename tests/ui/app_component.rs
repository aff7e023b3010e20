use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use wishmaker::config::Config;
use wishmaker::logger::Logger;
use wishmaker::presenter::DeletePolicy;
use wishmaker::ui::core::{Action, Component, DialogType};
use wishmaker::ui::AppComponent;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    let action = app.handle_key_events(key(code));
    app.dispatch(action);
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn sample_app() -> AppComponent {
    AppComponent::new(Config::default(), Logger::new())
}

#[test]
fn test_starts_with_sample_wishes() {
    let app = sample_app();
    assert_eq!(app.event_count(), 2);
    assert_eq!(app.event_list().rows().len(), 2);
    assert!(!app.should_quit());
}

#[test]
fn test_starts_empty_without_seed() {
    let mut config = Config::default();
    config.events.seed_sample_events = false;
    let app = AppComponent::new(config, Logger::new());
    assert_eq!(app.event_count(), 0);
    assert_eq!(app.event_list().selected_index(), None);
}

#[test]
fn test_delete_with_confirmation() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(
        app.dialog().current(),
        Some(&DialogType::DeleteConfirmation {
            index: 0,
            title: "Fly to Maldives".to_string()
        })
    );
    assert_eq!(app.event_count(), 2);

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.dialog().is_visible());
    assert_eq!(app.event_count(), 1);
    assert_eq!(app.event_list().rows()[0].title, "Learn guitar");
    assert_eq!(app.status_message(), Some(wishmaker::constants::SUCCESS_EVENT_DELETED));
}

#[test]
fn test_delete_cancelled() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.dialog().is_visible());
    assert_eq!(app.event_count(), 2);
}

#[test]
fn test_delete_without_confirmation() {
    let mut config = Config::default();
    config.ui.confirm_delete = false;
    let mut app = AppComponent::new(config, Logger::new());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.event_count(), 1);
    assert_eq!(app.event_list().rows()[0].title, "Fly to Maldives");
}

#[test]
fn test_stale_delete_follows_policy() {
    let mut app = sample_app();
    app.dispatch(Action::ConfirmDelete(7));
    assert_eq!(app.event_count(), 2);
    assert!(!app.dialog().is_visible());

    let mut config = Config::default();
    config.events.delete_policy = DeletePolicy::Report;
    let mut app = AppComponent::new(config, Logger::new());
    app.dispatch(Action::ConfirmDelete(7));
    assert_eq!(app.event_count(), 2);
    assert!(matches!(app.dialog().current(), Some(DialogType::Error(_))));
}

#[test]
fn test_add_new_wish() {
    let mut app = sample_app();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.dialog().current(), Some(&DialogType::EventCreation));

    // Keys that are global shortcuts elsewhere are plain text in the form
    type_text(&mut app, "Quit job, go surfing");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2026-06-01");
    press(&mut app, KeyCode::Enter);

    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());
    assert_eq!(app.event_count(), 3);

    let selected = app.event_list().selected_row().unwrap();
    assert_eq!(selected.title, "Quit job, go surfing");
    assert_eq!(selected.id, 3);
}

#[test]
fn test_go_back_leaves_screen() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('b'));
    assert!(app.should_quit());
}

#[test]
fn test_escape_closes_dialog_before_going_back() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().current(), Some(&DialogType::Help));

    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = sample_app();
    let action = app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(action, Action::Quit);
    app.dispatch(action);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_open_form() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.dialog().current(), Some(&DialogType::EventCreation));

    let action = app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(action, Action::Quit);
    app.dispatch(action);

    assert!(app.should_quit());
    assert_eq!(app.dialog().form().value(0), "");
}

#[test]
fn test_ctrl_c_quits_from_confirmation() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Char('d'));

    let action = app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    app.dispatch(action);

    assert!(app.should_quit());
    assert_eq!(app.event_count(), 2);
}

#[test]
fn test_reload_key_keeps_list_in_sync() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.event_list().rows().len(), 2);
    assert_eq!(app.event_list().selected_index(), Some(1));
    assert!(!app.should_quit());
}

#[test]
fn test_mouse_wheel_moves_selection() {
    let mut app = sample_app();
    let scroll = |kind| MouseEvent {
        kind,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    };

    let action = app.handle_mouse_events(scroll(MouseEventKind::ScrollDown));
    app.dispatch(action);
    assert_eq!(app.event_list().selected_index(), Some(1));

    let action = app.handle_mouse_events(scroll(MouseEventKind::ScrollUp));
    app.dispatch(action);
    assert_eq!(app.event_list().selected_index(), Some(0));

    // Dialogs are modal for the mouse too
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.handle_mouse_events(scroll(MouseEventKind::ScrollDown)), Action::None);
}

#[test]
fn test_enter_shows_details() {
    let mut app = sample_app();
    press(&mut app, KeyCode::Enter);

    match app.dialog().current() {
        Some(DialogType::Info(details)) => {
            assert!(details.starts_with("Fly to Maldives"));
            assert!(details.contains("great vacation"));
        }
        other => panic!("expected info dialog, got {other:?}"),
    }
}

#[test]
fn test_render_shows_wishes_and_chrome() {
    let mut app = sample_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Fly to Maldives"));
    assert!(text.contains("Learn guitar"));
    assert!(text.contains("Back"));
    assert!(text.contains("Add"));
}
