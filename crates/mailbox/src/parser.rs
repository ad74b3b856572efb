use crate::address::{address_tokens, normalize, EmailAddress};
use crate::config::ParserConfig;
use crate::dedup::SeenIdentifiers;
use crate::error::Result;
use crate::types::{MessageId, ParseOutcome, ParsedMessage};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Decode file bytes as UTF-8, dropping malformed sequences instead of failing
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}

/// Line-oriented header extractor for raw message files
///
/// Each header rule is a first-match scan over the file's lines; later lines
/// that also look like headers (quoted replies, forwarded blocks) are ignored.
#[derive(Debug, Clone, Default)]
pub struct MessageParser {
    config: ParserConfig,
}

impl MessageParser {
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse raw file bytes
    pub fn parse_bytes(&self, bytes: &[u8], seen: &mut SeenIdentifiers) -> ParseOutcome {
        self.parse(&decode_lossy(bytes), seen)
    }

    /// Parse one message, consulting and updating the dedup index
    pub fn parse(&self, content: &str, seen: &mut SeenIdentifiers) -> ParseOutcome {
        let message_id = self.find_message_id(content);

        if let Some(id) = &message_id {
            if self.config.dedup.lookup_active(seen) && seen.contains(id) {
                return ParseOutcome::Duplicate {
                    message_id: id.clone(),
                };
            }
            seen.insert(id.clone());
        }

        ParseOutcome::Message(ParsedMessage {
            message_id,
            sender: self.find_sender(content),
            recipients: self.find_recipients(content).unwrap_or_default(),
        })
    }

    fn find_message_id(&self, content: &str) -> Option<MessageId> {
        let marker = self.config.identifier_marker.as_str();
        content.lines().find_map(|line| {
            line.find(marker)
                .map(|pos| MessageId::new(line[pos + marker.len()..].trim()))
        })
    }

    fn find_sender(&self, content: &str) -> Option<EmailAddress> {
        content
            .lines()
            .filter(|line| self.is_sender_line(line))
            .find_map(|line| address_tokens(line).next().map(normalize))
    }

    fn find_recipients(&self, content: &str) -> Option<BTreeSet<EmailAddress>> {
        content
            .lines()
            .filter(|line| self.is_recipient_line(line))
            .map(|line| address_tokens(line).map(normalize).collect::<BTreeSet<_>>())
            .find(|recipients| !recipients.is_empty())
    }

    fn is_sender_line(&self, line: &str) -> bool {
        let config = &self.config;
        line.contains(&config.sender_marker)
            && !Self::has_negative(line, &config.sender_negative_marker)
            && line.contains(&config.sender_domain)
    }

    fn is_recipient_line(&self, line: &str) -> bool {
        let config = &self.config;
        line.contains(&config.recipient_marker)
            && !Self::has_negative(line, &config.recipient_negative_marker)
    }

    fn has_negative(line: &str, marker: &str) -> bool {
        !marker.is_empty() && line.contains(marker)
    }
}
