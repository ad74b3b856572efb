use crate::types::CommunicationGraph;
use mailgraph_mailbox::EmailAddress;
use std::collections::BTreeMap;

/// What [`EdgeAggregator::record`] did with one message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Pairs added
    pub recorded: usize,

    /// Recipients that failed address validation
    pub rejected_recipients: usize,

    /// Sender failed validation; nothing was recorded
    pub sender_rejected: bool,
}

/// Collects raw (sender, recipient) pairs and folds them into a graph once
#[derive(Debug, Default)]
pub struct EdgeAggregator {
    pairs: Vec<(EmailAddress, EmailAddress)>,
}

impl EdgeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `sender -> recipient` for every valid recipient
    pub fn record<'a>(
        &mut self,
        sender: &EmailAddress,
        recipients: impl IntoIterator<Item = &'a EmailAddress>,
    ) -> RecordOutcome {
        if !sender.is_valid() {
            return RecordOutcome {
                sender_rejected: true,
                ..Default::default()
            };
        }

        let mut outcome = RecordOutcome::default();
        for recipient in recipients {
            if recipient.is_valid() {
                self.pairs.push((sender.clone(), recipient.clone()));
                outcome.recorded += 1;
            } else {
                log::trace!("Rejected recipient {recipient} of {sender}");
                outcome.rejected_recipients += 1;
            }
        }
        outcome
    }

    /// Raw pairs recorded so far (before grouping)
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Group by pair, sum occurrences and drop self-loops
    pub fn finalize(self) -> CommunicationGraph {
        let mut grouped: BTreeMap<(EmailAddress, EmailAddress), u64> = BTreeMap::new();
        for pair in self.pairs {
            *grouped.entry(pair).or_insert(0) += 1;
        }

        let mut graph = CommunicationGraph::new();
        for ((source, target), count) in grouped {
            if source == target {
                graph.dropped_self_loops += 1;
                continue;
            }
            graph.add_correspondence(source.as_str(), target.as_str(), count);
        }

        log::info!(
            "Built communication graph: {} addresses, {} edges ({} self-loops dropped)",
            graph.address_count(),
            graph.edge_count(),
            graph.dropped_self_loops
        );

        graph
    }
}
