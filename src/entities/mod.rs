//! Data models shared by the data owner, the presenter and the UI

pub mod event;

pub use event::{EventDraft, EventRecord};
