//! JSON-file-backed event store.
//!
//! The alternate backend for running without the booking API: events live
//! in one JSON file under the platform data directory. Every operation is
//! a read-modify-write of that file, mirroring the remote store's
//! semantics (server-assigned ids, audit stamps, full-list reads).

use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use super::EventStore;
use crate::error::{SalonError, SalonResult};
use crate::event::{Event, EventData};

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> LocalStore {
        LocalStore { path: path.into() }
    }

    fn read_all(&self) -> SalonResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            SalonError::Store(format!("Invalid events file {}: {e}", self.path.display()))
        })
    }

    fn write_all(&self, events: &[Event]) -> SalonResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| SalonError::Store(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn not_found(id: &str) -> SalonError {
        SalonError::Store(format!("Event not found: {id}"))
    }
}

impl EventStore for LocalStore {
    async fn list(&self) -> SalonResult<Vec<Event>> {
        self.read_all()
    }

    async fn get(&self, id: &str) -> SalonResult<Event> {
        self.read_all()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, data: &EventData) -> SalonResult<Event> {
        let mut events = self.read_all()?;

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4().to_string(),
            data: data.clone(),
            created_date: Some(now),
            updated_date: Some(now),
        };

        events.push(event.clone());
        self.write_all(&events)?;
        Ok(event)
    }

    async fn update(&self, id: &str, data: &EventData) -> SalonResult<Event> {
        let mut events = self.read_all()?;

        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        event.data = data.clone();
        event.updated_date = Some(Utc::now());
        let updated = event.clone();

        self.write_all(&events)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> SalonResult<()> {
        let mut events = self.read_all()?;

        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(Self::not_found(id));
        }

        self.write_all(&events)
    }
}
