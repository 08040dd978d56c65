//! Event persistence.
//!
//! Backends implement four primitives (`load`, `load_all`, `save`, `remove`);
//! the operations the rest of drunksched calls are provided on top of them.
//! Each operation is a read-modify-write of a whole event, so concurrent
//! writers to the same event resolve last-write-wins.

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attendance::Attendance;
use crate::categorize::{display_order, is_future_relevant, today};
use crate::error::{SchedError, SchedResult};
use crate::event::{Event, EventDraft};

/// Which events `EventStore::list` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    All,
    /// Only events with a final date or candidate date that hasn't passed
    #[default]
    FutureRelevant,
}

pub trait EventStore: Send + Sync {
    /// Fetch one event, `None` if it doesn't exist.
    fn load(&self, id: &str) -> SchedResult<Option<Event>>;

    fn load_all(&self) -> SchedResult<Vec<Event>>;

    /// Insert or fully replace an event.
    fn save(&self, event: &Event) -> SchedResult<()>;

    /// Returns false if there was nothing to remove.
    fn remove(&self, id: &str) -> SchedResult<bool>;

    fn create(&self, draft: EventDraft) -> SchedResult<Event> {
        let event = Event::new(draft)?;
        self.save(&event)?;
        info!(id = %event.id, name = %event.event_name, "created event");
        Ok(event)
    }

    fn list(&self, filter: ListFilter) -> SchedResult<Vec<Event>> {
        self.list_on(filter, today())
    }

    /// `list` relative to a given day.
    fn list_on(&self, filter: ListFilter, today: NaiveDate) -> SchedResult<Vec<Event>> {
        let mut events = self.load_all()?;
        if filter == ListFilter::FutureRelevant {
            events.retain(|e| is_future_relevant(e, today));
        }
        debug!(count = events.len(), ?filter, "listed events");
        Ok(display_order(events, today))
    }

    fn get(&self, id: &str) -> SchedResult<Event> {
        self.load(id)?
            .ok_or_else(|| SchedError::EventNotFound(id.to_string()))
    }

    fn update(&self, id: &str, draft: EventDraft) -> SchedResult<Event> {
        modify(self, id, |event| event.update_details(draft))
    }

    fn confirm_date(&self, id: &str, date: NaiveDate) -> SchedResult<Event> {
        let event = modify(self, id, |event| {
            event.confirm(date);
            Ok(())
        })?;
        info!(id, %date, "confirmed final date");
        Ok(event)
    }

    fn unconfirm_date(&self, id: &str) -> SchedResult<Event> {
        let event = modify(self, id, |event| {
            event.unconfirm();
            Ok(())
        })?;
        info!(id, "cleared final date");
        Ok(event)
    }

    fn delete(&self, id: &str) -> SchedResult<()> {
        if !self.remove(id)? {
            return Err(SchedError::EventNotFound(id.to_string()));
        }
        info!(id, "deleted event");
        Ok(())
    }

    fn submit_response(&self, id: &str, name: &str, attendance: Attendance) -> SchedResult<Event> {
        let event = modify(self, id, |event| event.submit(name, attendance))?;
        info!(id, name = name.trim(), "recorded response");
        Ok(event)
    }

    fn delete_response(&self, id: &str, name: &str) -> SchedResult<Event> {
        let event = modify(self, id, |event| event.remove_response(name).map(|_| ()))?;
        info!(id, name = name.trim(), "removed response");
        Ok(event)
    }
}

/// Load, change and save an event. Nothing is written if `change` fails.
fn modify<S, F>(store: &S, id: &str, change: F) -> SchedResult<Event>
where
    S: EventStore + ?Sized,
    F: FnOnce(&mut Event) -> SchedResult<()>,
{
    let mut event = store.get(id)?;
    change(&mut event)?;
    store.save(&event)?;
    Ok(event)
}
