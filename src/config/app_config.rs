use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::{AwsConnectionConfig, EventBusConfig};

/// Directory searched for `app.yaml` when none is given.
const DEFAULT_CONFIG_DIR: &str = "configs";

/// Application configuration for evbus.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Bus name and field defaults for published events.
    #[serde(default)]
    pub event_bus: EventBusConfig,

    /// AWS connection settings.
    #[serde(default)]
    pub aws: AwsConnectionConfig,
}

impl AppConfig {
    /// Creates a new `AppConfig` from `<config_dir>/app.yaml` layered with
    /// `EVBUS__*` environment variables.
    ///
    /// The file is optional; a missing file yields the defaults.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        Self::load(config_dir, Environment::with_prefix("EVBUS").separator("__"))
    }

    fn load(config_dir: Option<&str>, environment: Environment) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or(DEFAULT_CONFIG_DIR);
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)).required(false))
            .add_source(environment)
            .build()?;
        s.try_deserialize()
    }
}
