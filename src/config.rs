//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::history::FrameHistory;

/// Settings for a [`LightClient`](crate::LightClient).
///
/// Deserializable so an embedding application can keep it next to its own
/// configuration. Light settings themselves are never stored here.
///
/// # Examples
///
/// ```
/// use illumi_led::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{"name": "Desk"}"#).unwrap();
/// assert_eq!(config.name.as_deref(), Some("Desk"));
/// assert_eq!(config.history_size, 100);
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Label used in logs and diagnostics.
    pub name: Option<String>,
    /// Number of frames kept in the history; 0 disables it.
    pub history_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            name: None,
            history_size: FrameHistory::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl ClientConfig {
    pub fn named(name: &str) -> Self {
        ClientConfig {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_missing_name() {
        let json = serde_json::to_string(&ClientConfig::default()).unwrap();
        assert_eq!(json, r#"{"history_size":100}"#);
    }

    #[test]
    fn test_parse_full() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"name": "Shelf", "history_size": 0}"#).unwrap();
        assert_eq!(config, ClientConfig { history_size: 0, ..ClientConfig::named("Shelf") });
    }
}
