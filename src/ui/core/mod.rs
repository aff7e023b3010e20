//! Core UI functionality for the WishMaker application.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling and frame timing
//!
//! Components turn key presses into [`Action`]s; the app component applies
//! them against the event list and asks the list to reload.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
