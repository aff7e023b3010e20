//! Terminal user interface for WishMaker
//!
//! This module is the display surface of the event list: terminal setup, the
//! main loop and all components.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;

pub use app_component::AppComponent;
pub use layout::LayoutManager;

use crate::config::Config;
use crate::logger::Logger;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use tokio::time::Duration;

/// Run the wish calendar until the user leaves it
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(config, logger.clone());
    logger.log(format!("App: Started with {} wish(es)", app.event_count()));

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, EventHandler::with_tick_rate(tick_rate)).await;

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppComponent,
    mut events: EventHandler,
) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty && events.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            events.mark_rendered();
            dirty = false;
        }

        match events.next_event().await? {
            EventType::Key(key) => {
                let action = app.handle_key_events(key);
                app.dispatch(action);
                dirty = true;
            }
            EventType::Mouse(mouse) => {
                let action = app.handle_mouse_events(mouse);
                dirty |= action != Action::None;
                app.dispatch(action);
            }
            EventType::Resize(_, _) => dirty = true,
            EventType::Tick | EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
