//! Publishing events to a bus.

mod error;
mod eventbridge;
mod publish;
mod request;
mod traits;

pub use error::PublisherError;
pub use eventbridge::EventBridgeClient;
pub use publish::publish;
pub use request::{PutEventsEntry, PutEventsRequest};
#[cfg(test)]
pub use traits::MockEventBusClient;
pub use traits::EventBusClient;
