use serde::Deserialize;

/// Defaults applied to events published from the command line.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EventBusConfig {
    /// Name or ARN of the destination bus.
    #[serde(default)]
    pub name: String,

    /// Detail-type used when none is given.
    #[serde(default)]
    pub detail_type: String,

    /// Source used when none is given.
    #[serde(default)]
    pub source: String,
}
