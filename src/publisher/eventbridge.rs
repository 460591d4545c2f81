//! Event bus client backed by the AWS EventBridge SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_eventbridge::types::PutEventsRequestEntry;

use super::{EventBusClient, PublisherError, PutEventsEntry, PutEventsRequest};
use crate::config::AwsConnectionConfig;

/// An EventBridge connection.
#[derive(Debug, Clone)]
pub struct EventBridgeClient {
    client: aws_sdk_eventbridge::Client,
}

impl EventBridgeClient {
    /// Wraps an SDK client built by the caller.
    pub fn new(client: aws_sdk_eventbridge::Client) -> Self {
        Self { client }
    }

    /// Builds a client from the given connection settings.
    ///
    /// Unset fields fall through to the SDK's default provider chains
    /// (environment, shared config files, instance metadata).
    pub async fn from_config(config: &AwsConnectionConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile_name {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.as_str());
        }

        let sdk_config = loader.load().await;
        Self::new(aws_sdk_eventbridge::Client::new(&sdk_config))
    }
}

impl From<PutEventsEntry> for PutEventsRequestEntry {
    fn from(entry: PutEventsEntry) -> Self {
        PutEventsRequestEntry::builder()
            .detail(entry.detail)
            .detail_type(entry.detail_type)
            .event_bus_name(entry.event_bus_name)
            .source(entry.source)
            .build()
    }
}

#[async_trait]
impl EventBusClient for EventBridgeClient {
    async fn put_events(&self, request: PutEventsRequest) -> Result<(), PublisherError> {
        let entries = request.entries.into_iter().map(PutEventsRequestEntry::from).collect();

        let output = self
            .client
            .put_events()
            .set_entries(Some(entries))
            .send()
            .await
            .map_err(PublisherError::transport)?;

        let failed = output.entries().iter().filter(|entry| entry.error_code().is_some()).count();
        if failed > 0 {
            tracing::warn!(failed, "Event bus accepted the request but rejected some entries.");
        }

        Ok(())
    }
}
