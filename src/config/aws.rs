use serde::Deserialize;
use url::Url;

use super::deserialize_optional_url;

/// Connection settings for the AWS SDK.
///
/// Every field is optional; unset ones are resolved by the SDK's default
/// provider chains. Credentials are never configured here.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AwsConnectionConfig {
    /// Region to send requests to.
    #[serde(default)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[serde(default)]
    pub profile_name: Option<String>,

    /// Overrides the service endpoint, e.g. a LocalStack instance.
    #[serde(default, deserialize_with = "deserialize_optional_url")]
    pub endpoint_url: Option<Url>,
}
