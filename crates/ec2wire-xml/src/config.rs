//! Decoder configuration.

use std::env;

/// Read-only settings for a decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Strip leading and trailing whitespace from element text.
    pub trim_text: bool,
    /// Maximum element nesting depth; `None` leaves depth bounded only by memory.
    pub max_depth: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            trim_text: true,
            max_depth: None,
        }
    }
}

impl DecoderConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `EC2WIRE_XML_TRIM_TEXT` | `true` |
    /// | `EC2WIRE_XML_MAX_DEPTH` | *(unbounded)* |
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            trim_text: env_bool("EC2WIRE_XML_TRIM_TEXT", true),
            max_depth: env::var("EC2WIRE_XML_MAX_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Return a copy with the given depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}
