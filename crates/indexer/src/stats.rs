use mailgraph_graph::RecordOutcome;
use serde::{Deserialize, Serialize};

/// Counters for one corpus run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Regular files yielded by the walker
    pub files_scanned: usize,

    /// Files parsed as new messages
    pub messages: usize,

    /// Files skipped because their identifier was already seen
    pub duplicates: usize,

    /// Messages without a qualifying sender line
    pub missing_sender: usize,

    /// Messages whose sender failed address validation
    pub rejected_senders: usize,

    /// Recipients dropped by address validation
    pub rejected_recipients: usize,

    /// (sender, recipient) occurrences handed to the aggregator
    pub pairs_recorded: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,

    /// Files that could not be read
    pub errors: Vec<String>,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, outcome: RecordOutcome) {
        if outcome.sender_rejected {
            self.rejected_senders += 1;
        }
        self.rejected_recipients += outcome.rejected_recipients;
        self.pairs_recorded += outcome.recorded;
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn read_errors(&self) -> usize {
        self.errors.len()
    }
}
