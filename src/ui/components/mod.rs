//! Reusable UI components

pub mod dialog_component;
pub mod event_list_component;
pub mod navigation_bar;
pub mod status_bar;

pub use dialog_component::{DialogComponent, EventForm};
pub use event_list_component::{EventListComponent, EventRow};
pub use navigation_bar::NavigationBarComponent;
pub use status_bar::StatusBar;
