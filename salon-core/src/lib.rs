//! Core types and logic for the salon event-booking admin tooling.
//!
//! This crate provides everything the front end needs to keep a calendar
//! view, an event form and a remote data store consistent:
//! - `event` — the booking entity, form drafts and the calendar display contract
//! - `validate` — field-level form validation and local/server error merging
//! - `colors` / `title` — deterministic display derivation per event
//! - `store` — the four-operation event store (remote HTTP API or local JSON file)
//! - `session` — the edit-session state machine driving create/update/delete

pub mod colors;
pub mod config;
pub mod error;
pub mod event;
pub mod session;
pub mod store;
pub mod title;
pub mod validate;

// Re-export the central types at crate root for convenience
pub use error::{SalonError, SalonResult};
pub use event::{CalendarItem, Event, EventData, EventForm, EventType};
pub use title::Viewport;
pub use validate::FieldError;
