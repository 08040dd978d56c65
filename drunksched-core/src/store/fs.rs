//! Event store backed by a directory of JSON files.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use tracing::warn;

use crate::error::{SchedError, SchedResult};
use crate::event::Event;
use crate::store::EventStore;

const EXTENSION: &str = "json";

/// One `<id>.json` file per event.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> SchedResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SchedError::StoreUnavailable(format!("could not create {}: {e}", dir.display()))
        })?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> SchedResult<PathBuf> {
        // Ids end up in file names
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SchedError::EventNotFound(id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.{EXTENSION}")))
    }

    fn read_event(path: &Path) -> SchedResult<Event> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SchedError::Serialization(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    fn unavailable(&self, e: std::io::Error) -> SchedError {
        SchedError::StoreUnavailable(format!("{}: {e}", self.dir.display()))
    }
}

impl EventStore for FileStore {
    fn load(&self, id: &str) -> SchedResult<Option<Event>> {
        let path = match self.path_for(id) {
            Ok(path) => path,
            Err(_) => return Ok(None),
        };

        if !path.exists() {
            return Ok(None);
        }
        Self::read_event(&path).map(Some)
    }

    fn load_all(&self) -> SchedResult<Vec<Event>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| self.unavailable(e))?;

        let events = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == EXTENSION))
            .filter_map(|path| match Self::read_event(&path) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable event file");
                    None
                }
            })
            .collect();

        Ok(events)
    }

    fn save(&self, event: &Event) -> SchedResult<()> {
        let path = self.path_for(&event.id)?;

        let content = serde_json::to_string_pretty(event)
            .map_err(|e| SchedError::Serialization(e.to_string()))?;

        // Unique temp file per write, last rename wins
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| self.unavailable(e))?;
        temp.write_all(content.as_bytes()).map_err(|e| self.unavailable(e))?;
        temp.persist(&path).map_err(|e| self.unavailable(e.error))?;
        Ok(())
    }

    fn remove(&self, id: &str) -> SchedResult<bool> {
        let Ok(path) = self.path_for(id) else {
            return Ok(false);
        };

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.unavailable(e)),
        }
    }
}
