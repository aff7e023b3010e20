//! Event list presenter
//!
//! Mediates between a display surface and the data owner. A presenter borrows
//! the [`EventSource`] for one pass (a render, a tap, a delete) and is dropped
//! afterwards; the surface never holds on to the records it was shown.

use crate::constants::PLACEHOLDER_TITLE;
use crate::entities::EventRecord;
use crate::error::{EventListError, Result};
use crate::source::EventSource;
use serde::{Deserialize, Serialize};

/// What `delete` does with an index that addresses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Invalid index is a logged no-op
    #[default]
    Ignore,
    /// Invalid index is returned as [`EventListError::OutOfRange`]
    Report,
}

/// Anything that renders the list and re-pulls it on demand.
pub trait DisplaySurface {
    /// Re-read `count()`/`record_at()` from the presenter and redraw
    fn reload_data(&mut self, presenter: &EventListPresenter<'_>);
}

pub struct EventListPresenter<'a> {
    source: Option<&'a mut dyn EventSource>,
    delete_policy: DeletePolicy,
}

impl<'a> EventListPresenter<'a> {
    pub fn new(source: &'a mut dyn EventSource) -> Self {
        Self {
            source: Some(source),
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Presenter with no data source configured yet
    pub fn detached() -> Self {
        Self {
            source: None,
            delete_policy: DeletePolicy::default(),
        }
    }

    pub fn with_delete_policy(mut self, delete_policy: DeletePolicy) -> Self {
        self.delete_policy = delete_policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    fn events(&self) -> &[EventRecord] {
        self.source.as_deref().and_then(|source| source.events()).unwrap_or(&[])
    }

    /// Number of records; 0 when the source is absent
    pub fn count(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Record at `index` in display order
    pub fn record_at(&self, index: usize) -> Result<&EventRecord> {
        self.source
            .as_deref()
            .and_then(|source| source.event(index))
            .ok_or_else(|| EventListError::OutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Display-path lookup: an out-of-range index yields an empty placeholder row
    pub fn record_or_placeholder(&self, index: usize) -> EventRecord {
        match self.record_at(index) {
            Ok(record) => record.clone(),
            Err(e) => {
                log::debug!("Rendering placeholder: {}", e);
                EventRecord {
                    id: 0,
                    title: PLACEHOLDER_TITLE.to_string(),
                    description: String::new(),
                    start_date: String::new(),
                    end_date: String::new(),
                }
            }
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        self.events().iter()
    }

    /// Remove the record at `index`.
    ///
    /// Returns the removed record. An invalid index is handled according to the
    /// presenter's [`DeletePolicy`].
    pub fn delete(&mut self, index: usize) -> Result<Option<EventRecord>> {
        let count = self.count();
        let removed = self.source.as_deref_mut().and_then(|source| source.delete_event(index));

        match (removed, self.delete_policy) {
            (Some(record), _) => {
                log::info!("Deleted event {} '{}'", record.id, record.title);
                Ok(Some(record))
            }
            (None, DeletePolicy::Ignore) => {
                log::warn!("Ignoring delete of index {} ({} event(s))", index, count);
                Ok(None)
            }
            (None, DeletePolicy::Report) => Err(EventListError::OutOfRange { index, count }),
        }
    }

    /// Ask `surface` to re-pull and redraw
    pub fn refresh(&self, surface: &mut dyn DisplaySurface) {
        surface.reload_data(self);
    }
}
