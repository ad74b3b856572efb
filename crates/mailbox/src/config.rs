use crate::dedup::DedupPolicy;
use crate::error::{MailboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header markers and filters used by the message parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Substring identifying the message identifier line
    pub identifier_marker: String,

    /// Substring identifying the sender line
    pub sender_marker: String,

    /// Lines containing this are never treated as the sender line
    pub sender_negative_marker: String,

    /// Sender line must contain this (e.g. `@enron.com`); empty disables the filter
    pub sender_domain: String,

    /// Substring identifying the recipient line
    pub recipient_marker: String,

    /// Lines containing this are never treated as the recipient line
    pub recipient_negative_marker: String,

    /// Duplicate lookup policy
    pub dedup: DedupPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            identifier_marker: "Message-ID: ".to_string(),
            sender_marker: "From: ".to_string(),
            sender_negative_marker: "X-From: ".to_string(),
            sender_domain: "@enron.com".to_string(),
            recipient_marker: "To: ".to_string(),
            recipient_negative_marker: "X-To: ".to_string(),
            dedup: DedupPolicy::Strict,
        }
    }
}

impl ParserConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("identifier_marker", &self.identifier_marker),
            ("sender_marker", &self.sender_marker),
            ("recipient_marker", &self.recipient_marker),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MailboxError::invalid_config(format!("{name} must not be empty")));
            }
        }

        if !self.sender_domain.is_empty() && !self.sender_domain.contains('@') {
            return Err(MailboxError::invalid_config(format!(
                "sender_domain ({}) must include '@'",
                self.sender_domain
            )));
        }

        Ok(())
    }
}
