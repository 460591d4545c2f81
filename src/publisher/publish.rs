use serde::Serialize;

use super::{EventBusClient, PublisherError, PutEventsEntry, PutEventsRequest};
use crate::models::EventEnvelope;

/// Publishes `envelope` as a single entry through `client`.
///
/// Fails with [`PublisherError::Validation`] when the bus name is empty and
/// with [`PublisherError::Serialization`] when the payload cannot be encoded;
/// in both cases `client` is never called. Transport errors are returned as the
/// client reports them.
///
/// A successful call only means the request was accepted. Per-entry failures
/// the service reports inside its response are not surfaced here.
pub async fn publish<T, C>(envelope: &EventEnvelope<T>, client: &C) -> Result<(), PublisherError>
where
    T: Serialize,
    C: EventBusClient + ?Sized,
{
    if envelope.bus_name.is_empty() {
        return Err(PublisherError::Validation("event bus name is required".to_string()));
    }

    let detail = serde_json::to_string(&envelope.payload)?;

    let entry = PutEventsEntry {
        detail,
        detail_type: envelope.effective_detail_type().to_string(),
        event_bus_name: envelope.bus_name.clone(),
        source: envelope.effective_source().to_string(),
    };

    tracing::debug!(
        bus = %entry.event_bus_name,
        detail_type = %entry.detail_type,
        source = %entry.source,
        "Submitting event entry."
    );

    client.put_events(PutEventsRequest::single(entry)).await
}
