//! WishMaker - a terminal wish calendar
//!
//! Keeps a list of wishes ("events"), shows them in a terminal UI built with
//! Ratatui and lets the user add and delete them.
//!
//! # Modules
//!
//! * [`entities`] - The event record and its draft form
//! * [`source`] - The data owner boundary and the in-memory owner
//! * [`presenter`] - Mediates between the data owner and a display surface
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Date label helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Event records
pub mod entities;

/// Error types for list operations
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Event list presenter and display surface contract
pub mod presenter;

/// Data owner trait and in-memory implementation
pub mod source;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use entities::{EventDraft, EventRecord};
pub use error::EventListError;
pub use presenter::{DeletePolicy, DisplaySurface, EventListPresenter};
pub use source::{EventSource, InMemoryEventSource};
