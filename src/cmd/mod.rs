//! Subcommands of the `evbus` binary.

pub mod inspect;
pub mod publish;

pub use inspect::InspectArgs;
pub use publish::PublishArgs;
use thiserror::Error;

use crate::publisher::PublisherError;

/// Errors surfaced by the command line.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the event body or input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// Input was not valid JSON or not a valid event.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The publisher rejected or failed to send the event.
    #[error("Publish failed: {0}")]
    Publisher(#[from] PublisherError),
}
