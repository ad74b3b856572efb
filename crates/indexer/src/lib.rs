//! # Mailgraph Indexer
//!
//! Drives a corpus of one-message-per-file mail into a communication graph.
//!
//! ## Pipeline
//!
//! ```text
//! Corpus root
//!     │
//!     ├──> File Scanner (every regular file, traversal order)
//!     │
//!     ├──> Message Parser (lossy decode, first-match header scans)
//!     │      └─> SeenIdentifiers (duplicates skipped)
//!     │
//!     └──> Edge Aggregator
//!            └─> CommunicationGraph (grouped, self-loops dropped)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mailgraph_indexer::CorpusIndexer;
//! use mailgraph_mailbox::ParserConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let indexer = CorpusIndexer::new("maildir", ParserConfig::default())?;
//!     let run = indexer.run()?;
//!
//!     println!("{} messages, {} edges", run.stats.messages, run.graph.edge_count());
//!     Ok(())
//! }
//! ```

mod error;
mod indexer;
mod scanner;
mod stats;

pub use error::{IndexerError, Result};
pub use indexer::{CorpusIndexer, CorpusRun, ScanProgress};
pub use scanner::{FileScanner, FileWalk, ScanOptions};
pub use stats::CorpusStats;
