//! Error types for the event list

use thiserror::Error;

/// Errors raised while reading or mutating the event list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventListError {
    /// Index does not address a record currently in the list
    #[error("index {index} is out of range for {count} event(s)")]
    OutOfRange { index: usize, count: usize },

    /// A record was submitted without a title
    #[error("event title cannot be empty")]
    EmptyTitle,

    /// Two records in one collection share an id
    #[error("duplicate event id {0}")]
    DuplicateId(u64),
}

pub type Result<T> = std::result::Result<T, EventListError>;
