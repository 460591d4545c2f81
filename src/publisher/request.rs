/// One event submission unit within a [`PutEventsRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutEventsEntry {
    /// JSON-encoded event body.
    pub detail: String,

    /// Category of the event.
    pub detail_type: String,

    /// Name or ARN of the destination bus.
    pub event_bus_name: String,

    /// Originating service.
    pub source: String,
}

/// A request to the remote publish operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PutEventsRequest {
    /// The entries to record.
    pub entries: Vec<PutEventsEntry>,
}

impl PutEventsRequest {
    /// Creates a request carrying exactly one entry.
    pub fn single(entry: PutEventsEntry) -> Self {
        Self { entries: vec![entry] }
    }
}
