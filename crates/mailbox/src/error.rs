use thiserror::Error;

/// Result type for mailbox operations
pub type Result<T> = std::result::Result<T, MailboxError>;

/// Errors raised while configuring the message parser
#[derive(Error, Debug)]
pub enum MailboxError {
    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be decoded
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MailboxError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
