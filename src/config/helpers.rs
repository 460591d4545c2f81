use serde::{Deserialize, Deserializer, de};
use url::Url;

/// Custom deserializer for an optional URL.
///
/// Absent or empty values become `None`.
pub fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(url_str) => Url::parse(url_str).map(Some).map_err(de::Error::custom),
    }
}
