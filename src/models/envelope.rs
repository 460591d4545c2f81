//! The outbound representation of an event, built by the caller right before
//! publishing.

use serde::Serialize;

use crate::publisher::{self, EventBusClient, PublisherError};

/// Value substituted for an empty detail-type or source.
pub const DEFAULT_FIELD_VALUE: &str = "default";

/// An event to be published to a bus.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope<T> {
    /// Name or ARN of the destination bus. Must not be empty.
    pub bus_name: String,

    /// Category of the event. Empty means [`DEFAULT_FIELD_VALUE`].
    pub detail_type: String,

    /// Originating service. Empty means [`DEFAULT_FIELD_VALUE`].
    pub source: String,

    /// The event body, encoded as JSON on publish.
    pub payload: T,
}

impl<T: Serialize> EventEnvelope<T> {
    /// Creates an envelope for `bus_name` with empty detail-type and source.
    pub fn new(bus_name: impl Into<String>, payload: T) -> Self {
        Self {
            bus_name: bus_name.into(),
            detail_type: String::new(),
            source: String::new(),
            payload,
        }
    }

    /// Sets the detail-type.
    pub fn detail_type(mut self, detail_type: impl Into<String>) -> Self {
        self.detail_type = detail_type.into();
        self
    }

    /// Sets the source.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// The detail-type that goes on the wire.
    pub fn effective_detail_type(&self) -> &str {
        or_default(&self.detail_type)
    }

    /// The source that goes on the wire.
    pub fn effective_source(&self) -> &str {
        or_default(&self.source)
    }

    /// Publishes this envelope through `client`.
    ///
    /// Shorthand for [`publisher::publish`].
    pub async fn publish<C>(&self, client: &C) -> Result<(), PublisherError>
    where
        C: EventBusClient + ?Sized,
    {
        publisher::publish(self, client).await
    }
}

fn or_default(value: &str) -> &str {
    if value.is_empty() { DEFAULT_FIELD_VALUE } else { value }
}
