//! Data models for events going to and coming from the bus.

mod envelope;
mod event;

pub use envelope::{DEFAULT_FIELD_VALUE, EventEnvelope};
pub use event::Event;
