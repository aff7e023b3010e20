//! Data owner boundary for the event list
//!
//! The presenter never owns records. It talks to an [`EventSource`], which answers
//! "give me everything", "give me the n-th record" and "remove the n-th record".
//! [`InMemoryEventSource`] is the owner used by the application.

use crate::constants::SAMPLE_EVENTS;
use crate::entities::{EventDraft, EventRecord};
use crate::error::{EventListError, Result};
use std::collections::HashSet;

pub trait EventSource {
    /// Full list in display order; `None` when no data is configured yet
    fn events(&self) -> Option<&[EventRecord]>;

    /// Record at `index` in display order
    fn event(&self, index: usize) -> Option<&EventRecord> {
        self.events().and_then(|events| events.get(index))
    }

    /// Remove the record at `index`, returning it. `None` if nothing was there.
    fn delete_event(&mut self, index: usize) -> Option<EventRecord>;
}

/// Owns the records for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct InMemoryEventSource {
    events: Vec<EventRecord>,
    next_id: u64,
}

impl Default for InMemoryEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventSource {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Source pre-filled with the sample wishes
    pub fn with_sample_events() -> Self {
        let mut source = Self::new();
        for (title, description, start_date, end_date) in SAMPLE_EVENTS {
            let draft = EventDraft::new(*title)
                .description(*description)
                .dates(*start_date, *end_date);
            // Sample titles are non-empty constants
            if let Err(e) = source.add(draft) {
                log::warn!("Skipping sample event '{}': {}", title, e);
            }
        }
        source
    }

    /// Build a source from existing records, keeping their ids.
    pub fn from_records(records: Vec<EventRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !record.is_valid() {
                return Err(EventListError::EmptyTitle);
            }
            if !seen.insert(record.id) {
                return Err(EventListError::DuplicateId(record.id));
            }
        }

        let next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            events: records,
            next_id,
        })
    }

    /// Append a new record and return its id
    pub fn add(&mut self, draft: EventDraft) -> Result<u64> {
        if draft.title.trim().is_empty() {
            return Err(EventListError::EmptyTitle);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.events.push(EventRecord::new(id, draft));
        log::debug!("Added event {} ({} total)", id, self.events.len());
        Ok(id)
    }

    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.events.iter().position(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for InMemoryEventSource {
    fn events(&self) -> Option<&[EventRecord]> {
        Some(&self.events)
    }

    fn delete_event(&mut self, index: usize) -> Option<EventRecord> {
        if index < self.events.len() {
            let removed = self.events.remove(index);
            log::debug!("Deleted event {} at index {}", removed.id, index);
            Some(removed)
        } else {
            None
        }
    }
}
