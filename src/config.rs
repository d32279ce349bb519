//! Decoder settings.

use serde_derive::{Deserialize, Serialize};

/// What to do with bytes left over after the last field of a layout.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TrailingBytes {
    #[default]
    Allow,
    Reject,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CodecConfig {
    pub trailing_bytes: TrailingBytes,
}

impl CodecConfig {
    /// Require payloads to end exactly at the last field.
    pub fn strict() -> Self {
        Self {
            trailing_bytes: TrailingBytes::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_trailing_bytes() {
        assert_eq!(CodecConfig::default().trailing_bytes, TrailingBytes::Allow);
    }

    #[test]
    fn test_deserialize_config() {
        let config: CodecConfig = serde_json::from_str(r#"{"trailingBytes":"reject"}"#).unwrap();
        assert_eq!(config, CodecConfig::strict());

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());

        assert!(serde_json::from_str::<CodecConfig>(r#"{"trailingBytes":"maybe"}"#).is_err());
    }
}
