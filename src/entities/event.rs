use serde::{Deserialize, Serialize};

/// A single wish or calendar event.
///
/// `id` is assigned by the owning [`EventSource`](crate::source::EventSource) when the
/// record is created and never changes afterwards. Dates are display labels and
/// are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl EventRecord {
    pub fn new(id: u64, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    /// A record is valid once it carries a non-empty title
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// User-entered fields for a record that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dates(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self.end_date = end_date.into();
        self
    }
}
