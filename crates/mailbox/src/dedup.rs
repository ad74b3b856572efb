use crate::types::MessageId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifiers of every message accepted so far in this run
#[derive(Debug, Default, Clone)]
pub struct SeenIdentifiers {
    ids: HashSet<MessageId>,
    recorded: usize,
}

impl SeenIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.ids.contains(id)
    }

    /// Record an identifier; returns `false` if it was already present
    pub fn insert(&mut self, id: MessageId) -> bool {
        self.recorded += 1;
        self.ids.insert(id)
    }

    /// Number of `insert` calls, repeats included
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// When the duplicate lookup is performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupPolicy {
    /// Every identifier is checked against the index
    #[default]
    Strict,

    /// Lookup only starts once more than one identifier has been recorded
    /// (repeats included), so the first two files with an identifier are
    /// never treated as duplicates.
    Legacy,
}

impl DedupPolicy {
    /// Whether the lookup is active given how many identifiers were recorded
    pub fn lookup_active(self, seen: &SeenIdentifiers) -> bool {
        match self {
            DedupPolicy::Strict => true,
            DedupPolicy::Legacy => seen.recorded() > 1,
        }
    }
}
