use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::{PublisherError, PutEventsRequest};

/// A connection to an event bus service.
///
/// Region, endpoint, and credentials all belong to the implementation; the
/// publisher only hands it a ready-made request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventBusClient: Send + Sync {
    /// Submits one publish request.
    async fn put_events(&self, request: PutEventsRequest) -> Result<(), PublisherError>;
}
