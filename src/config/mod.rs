//! Configuration module for evbus.

mod app_config;
mod aws;
mod event_bus;
mod helpers;

pub use app_config::AppConfig;
pub use aws::AwsConnectionConfig;
pub use event_bus::EventBusConfig;
pub use helpers::deserialize_optional_url;
