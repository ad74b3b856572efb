use crate::address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque per-message token used only for deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sender and recipients extracted from one message file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Identifier line token, if the file carried one
    pub message_id: Option<MessageId>,

    /// Normalized sender (not yet validated)
    pub sender: Option<EmailAddress>,

    /// Normalized recipients from the first recipient line (not yet validated)
    pub recipients: BTreeSet<EmailAddress>,
}

impl ParsedMessage {
    /// Sender if present and non-empty
    pub fn sender(&self) -> Option<&EmailAddress> {
        self.sender.as_ref().filter(|addr| !addr.is_empty())
    }
}

/// Result of parsing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A message whose identifier was not seen before
    Message(ParsedMessage),

    /// The identifier was already recorded; the file contributes nothing
    Duplicate { message_id: MessageId },
}

impl ParseOutcome {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ParseOutcome::Duplicate { .. })
    }

    pub fn message(&self) -> Option<&ParsedMessage> {
        match self {
            ParseOutcome::Message(message) => Some(message),
            ParseOutcome::Duplicate { .. } => None,
        }
    }
}
