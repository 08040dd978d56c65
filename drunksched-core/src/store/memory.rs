//! In-process event store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{SchedError, SchedResult};
use crate::event::Event;
use crate::store::EventStore;

/// Keeps events in a map keyed by id. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<HashMap<String, Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> SchedError {
    SchedError::StoreUnavailable("memory store lock poisoned".into())
}

impl EventStore for MemoryStore {
    fn load(&self, id: &str) -> SchedResult<Option<Event>> {
        let events = self.events.read().map_err(poisoned)?;
        Ok(events.get(id).cloned())
    }

    fn load_all(&self) -> SchedResult<Vec<Event>> {
        let events = self.events.read().map_err(poisoned)?;
        Ok(events.values().cloned().collect())
    }

    fn save(&self, event: &Event) -> SchedResult<()> {
        let mut events = self.events.write().map_err(poisoned)?;
        events.insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn remove(&self, id: &str) -> SchedResult<bool> {
        let mut events = self.events.write().map_err(poisoned)?;
        Ok(events.remove(id).is_some())
    }
}
