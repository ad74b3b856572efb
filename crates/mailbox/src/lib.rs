//! # Mailgraph Mailbox
//!
//! Header extraction for raw, one-message-per-file mail corpora.
//!
//! ## Pipeline
//!
//! ```text
//! File bytes
//!     │
//!     ├──> Lossy UTF-8 decode (malformed sequences dropped)
//!     │
//!     ├──> Identifier line ──> SeenIdentifiers (duplicate? stop)
//!     │
//!     ├──> First sender line ──> token ──> normalize
//!     │
//!     └──> First recipient line ──> tokens ──> normalize ──> set
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mailgraph_mailbox::{MessageParser, SeenIdentifiers};
//!
//! let parser = MessageParser::default();
//! let mut seen = SeenIdentifiers::new();
//!
//! let raw = "Message-ID: <1.JavaMail.evans@thyme>\n\
//!            From: alice@enron.com\n\
//!            To: bob@enron.com, <carol@enron.com>\n";
//!
//! let outcome = parser.parse(raw, &mut seen);
//! let message = outcome.message().unwrap();
//! assert_eq!(message.sender().unwrap().as_str(), "alice@enron.com");
//! assert_eq!(message.recipients.len(), 2);
//! ```

mod address;
mod config;
mod dedup;
mod error;
mod parser;
mod types;

pub use address::{address_tokens, is_valid, normalize, EmailAddress};
pub use config::ParserConfig;
pub use dedup::{DedupPolicy, SeenIdentifiers};
pub use error::{MailboxError, Result};
pub use parser::{decode_lossy, MessageParser};
pub use types::{MessageId, ParseOutcome, ParsedMessage};
