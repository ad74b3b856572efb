use crate::types::{CommunicationGraph, EdgeRow};
use petgraph::visit::EdgeRef;

impl CommunicationGraph {
    /// All edges as table rows, ordered by (source, target)
    pub fn rows(&self) -> Vec<EdgeRow> {
        let mut rows: Vec<EdgeRow> = self
            .graph
            .edge_references()
            .map(|edge| EdgeRow {
                source: self.graph[edge.source()].address.clone(),
                target: self.graph[edge.target()].address.clone(),
                count: edge.weight().count,
            })
            .collect();
        rows.sort();
        rows
    }

    /// Message count from `source` to `target`, if they ever corresponded
    pub fn count_between(&self, source: &str, target: &str) -> Option<u64> {
        let from = self.find_node(source)?;
        let to = self.find_node(target)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge).map(|weight| weight.count)
    }

    /// Everyone `source` wrote to, with counts, ordered by address
    pub fn recipients_of(&self, source: &str) -> Vec<(&str, u64)> {
        let Some(node) = self.find_node(source) else {
            return Vec::new();
        };

        let mut recipients: Vec<(&str, u64)> = self
            .graph
            .edges(node)
            .map(|edge| {
                (
                    self.graph[edge.target()].address.as_str(),
                    edge.weight().count,
                )
            })
            .collect();
        recipients.sort();
        recipients
    }

    /// Sum of all edge counts
    pub fn total_messages(&self) -> u64 {
        self.graph.edge_weights().map(|weight| weight.count).sum()
    }

    /// Top `limit` edges by count; ties keep (source, target) order
    pub fn heaviest(&self, limit: usize) -> Vec<EdgeRow> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.truncate(limit);
        rows
    }
}
