//! The shape of events delivered by the event bus to its targets.
//!
//! See <https://docs.aws.amazon.com/eventbridge/latest/userguide/eb-events.html>.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An event as received from the event bus.
///
/// The publisher never builds one of these; it only documents (and parses) the
/// wire shape that subscribers see.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Event {
    /// The event schema version, `"0"` for all current events.
    pub version: String,

    /// Unique identifier assigned by the bus.
    pub id: String,

    /// Caller-defined category of the event.
    #[serde(rename = "detail-type")]
    pub detail_type: String,

    /// Identifies the service that generated the event.
    pub source: String,

    /// The account that owns the bus.
    pub account: String,

    /// The time the event was recorded.
    pub time: DateTime<Utc>,

    /// The region the event originated in.
    pub region: String,

    /// ARNs of the resources involved in the event.
    pub resources: Vec<String>,

    /// The free-form event body.
    pub detail: Map<String, Value>,
}

impl Event {
    /// Parses a single event from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
