//! Event store backends.
//!
//! The store is the only authority over persisted events. Both backends
//! speak the same five operations; the session layer never knows which
//! one it is driving.

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::config::{BackendKind, SalonConfig};
use crate::error::SalonResult;
use crate::event::{Event, EventData};

/// The store interface the session layer drives.
///
/// Each operation is a single round trip with no internal retry; a failed
/// call surfaces immediately as a [`crate::SalonError`].
#[allow(async_fn_in_trait)]
pub trait EventStore {
    /// Fetch every event. This is the authoritative view; callers refetch
    /// after a mutation instead of patching a cached list.
    async fn list(&self) -> SalonResult<Vec<Event>>;

    /// Fetch one event by id.
    async fn get(&self, id: &str) -> SalonResult<Event>;

    /// Persist a new event; the store assigns the id and audit stamps.
    async fn create(&self, data: &EventData) -> SalonResult<Event>;

    /// Replace the client-authored fields of an existing event.
    async fn update(&self, id: &str, data: &EventData) -> SalonResult<Event>;

    /// Remove an event by id.
    async fn delete(&self, id: &str) -> SalonResult<()>;
}

/// The configured backend, resolved once at startup.
pub enum Backend {
    Remote(RemoteStore),
    Local(LocalStore),
}

impl Backend {
    pub fn from_config(config: &SalonConfig) -> SalonResult<Backend> {
        match config.backend {
            BackendKind::Api => Ok(Backend::Remote(RemoteStore::new(
                config.base_url.clone(),
                config.token.clone(),
            ))),
            BackendKind::Local => Ok(Backend::Local(LocalStore::new(config.events_path()?))),
        }
    }
}

impl EventStore for Backend {
    async fn list(&self) -> SalonResult<Vec<Event>> {
        match self {
            Backend::Remote(store) => store.list().await,
            Backend::Local(store) => store.list().await,
        }
    }

    async fn get(&self, id: &str) -> SalonResult<Event> {
        match self {
            Backend::Remote(store) => store.get(id).await,
            Backend::Local(store) => store.get(id).await,
        }
    }

    async fn create(&self, data: &EventData) -> SalonResult<Event> {
        match self {
            Backend::Remote(store) => store.create(data).await,
            Backend::Local(store) => store.create(data).await,
        }
    }

    async fn update(&self, id: &str, data: &EventData) -> SalonResult<Event> {
        match self {
            Backend::Remote(store) => store.update(id, data).await,
            Backend::Local(store) => store.update(id, data).await,
        }
    }

    async fn delete(&self, id: &str) -> SalonResult<()> {
        match self {
            Backend::Remote(store) => store.delete(id).await,
            Backend::Local(store) => store.delete(id).await,
        }
    }
}
