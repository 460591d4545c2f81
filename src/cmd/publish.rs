//! `evbus publish`: sends one event built from flags and config defaults.

use std::{io::Read, path::PathBuf};

use clap::Parser;
use serde_json::Value;

use super::Error;
use crate::{
    config::{AppConfig, EventBusConfig},
    models::EventEnvelope,
    publisher::{self, EventBridgeClient, EventBusClient},
};

/// Arguments of the `publish` subcommand.
#[derive(Parser, Debug, Default)]
pub struct PublishArgs {
    /// Destination bus. Falls back to `event_bus.name` from the config.
    #[arg(short, long)]
    pub bus: Option<String>,
    /// Detail-type of the event. Falls back to `event_bus.detail_type`.
    #[arg(short = 't', long)]
    pub detail_type: Option<String>,
    /// Source of the event. Falls back to `event_bus.source`.
    #[arg(short, long)]
    pub source: Option<String>,
    /// Event body as an inline JSON document.
    #[arg(short, long, conflicts_with = "file")]
    pub detail: Option<String>,
    /// Path to a file holding the event body. Reads stdin when neither this
    /// nor `--detail` is given.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl PublishArgs {
    /// Reads and parses the event body.
    pub fn read_detail(&self) -> Result<Value, Error> {
        let raw = match (&self.detail, &self.file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builds the envelope, preferring flags over configured defaults.
    pub fn envelope(&self, defaults: &EventBusConfig, detail: Value) -> EventEnvelope<Value> {
        let pick = |flag: &Option<String>, fallback: &str| {
            flag.clone().unwrap_or_else(|| fallback.to_string())
        };

        EventEnvelope::new(pick(&self.bus, &defaults.name), detail)
            .detail_type(pick(&self.detail_type, &defaults.detail_type))
            .source(pick(&self.source, &defaults.source))
    }
}

/// Loads the configuration from `config_dir` and publishes one event through
/// an EventBridge client built from it.
pub async fn run(config_dir: Option<&str>, args: PublishArgs) -> Result<(), Error> {
    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(config_dir)?;
    tracing::debug!(aws = ?config.aws, "Configuration loaded.");

    let client = EventBridgeClient::from_config(&config.aws).await;
    execute(args, &config.event_bus, &client).await
}

/// Publishes one event built from `args` through `client`.
pub async fn execute<C>(
    args: PublishArgs,
    defaults: &EventBusConfig,
    client: &C,
) -> Result<(), Error>
where
    C: EventBusClient + ?Sized,
{
    let detail = args.read_detail()?;
    let envelope = args.envelope(defaults, detail);

    publisher::publish(&envelope, client).await?;
    tracing::info!(bus = %envelope.bus_name, "Event published.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::publisher::{MockEventBusClient, PublisherError};

    fn defaults() -> EventBusConfig {
        EventBusConfig {
            name: "config-bus".to_string(),
            detail_type: "ConfigType".to_string(),
            source: String::new(),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = PublishArgs {
            bus: Some("flag-bus".to_string()),
            source: Some("flag-source".to_string()),
            ..Default::default()
        };

        let envelope = args.envelope(&defaults(), json!({}));

        assert_eq!(envelope.bus_name, "flag-bus");
        assert_eq!(envelope.detail_type, "ConfigType");
        assert_eq!(envelope.source, "flag-source");
        assert_eq!(envelope.effective_source(), "flag-source");
    }

    #[test]
    fn test_unset_config_fields_default_on_the_wire() {
        let envelope = PublishArgs::default().envelope(&defaults(), json!({}));

        assert_eq!(envelope.bus_name, "config-bus");
        assert_eq!(envelope.effective_source(), "default");
    }

    #[test]
    fn test_read_detail_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("detail.json");
        std::fs::write(&path, r#"{"orderId": "123"}"#).unwrap();

        let args = PublishArgs { file: Some(path), ..Default::default() };

        assert_eq!(args.read_detail().unwrap(), json!({ "orderId": "123" }));
    }

    #[test]
    fn test_invalid_inline_detail() {
        let args = PublishArgs { detail: Some("{not json".to_string()), ..Default::default() };
        assert!(matches!(args.read_detail(), Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_execute_publishes_inline_detail() {
        let mut client = MockEventBusClient::new();
        client
            .expect_put_events()
            .withf(|request| {
                request.entries.len() == 1
                    && request.entries[0].event_bus_name == "config-bus"
                    && request.entries[0].detail == r#"{"orderId":"123"}"#
            })
            .times(1)
            .returning(|_| Ok(()));

        let args =
            PublishArgs { detail: Some(r#"{ "orderId": "123" }"#.to_string()), ..Default::default() };

        execute(args, &defaults(), &client).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_with_invalid_config_is_a_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("app.yaml"), "aws:\n  endpoint_url: not a url\n")
            .unwrap();

        let args = PublishArgs { detail: Some("{}".to_string()), ..Default::default() };
        let result = run(Some(temp_dir.path().to_str().unwrap()), args).await;

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_execute_without_bus_is_a_validation_error() {
        let mut client = MockEventBusClient::new();
        client.expect_put_events().times(0);

        let args = PublishArgs { detail: Some("{}".to_string()), ..Default::default() };
        let result = execute(args, &EventBusConfig::default(), &client).await;

        assert!(matches!(result, Err(Error::Publisher(PublisherError::Validation(_)))));
    }
}
