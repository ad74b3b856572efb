use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node in the communication graph: one mailbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressNode {
    /// Normalized email address
    pub address: String,
}

/// Edge in the communication graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correspondence {
    /// Number of distinct messages from source to target
    pub count: u64,
}

/// One row of the exported edge table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
    pub count: u64,
}

/// Weighted directed graph of who wrote to whom
#[derive(Debug, Clone, Default)]
pub struct CommunicationGraph {
    /// Directed graph (sender -> recipient, weighted by message count)
    pub graph: DiGraph<AddressNode, Correspondence>,

    /// Address -> NodeIndex mapping for fast lookup
    pub address_index: HashMap<String, NodeIndex>,

    /// Distinct sender == recipient pairs removed while finalizing
    pub dropped_self_loops: usize,
}

impl CommunicationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node for an address, inserting it if needed
    pub fn add_address(&mut self, address: &str) -> NodeIndex {
        if let Some(&idx) = self.address_index.get(address) {
            return idx;
        }

        let idx = self.graph.add_node(AddressNode {
            address: address.to_string(),
        });
        self.address_index.insert(address.to_string(), idx);
        idx
    }

    /// Add `count` messages from `source` to `target`, merging with an existing edge
    pub fn add_correspondence(&mut self, source: &str, target: &str, count: u64) -> EdgeIndex {
        let from = self.add_address(source);
        let to = self.add_address(target);

        match self.graph.find_edge(from, to) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    weight.count += count;
                }
                edge
            }
            None => self.graph.add_edge(from, to, Correspondence { count }),
        }
    }

    /// Find node by address
    pub fn find_node(&self, address: &str) -> Option<NodeIndex> {
        self.address_index.get(address).copied()
    }

    pub fn address_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_interned() {
        let mut graph = CommunicationGraph::new();
        let a = graph.add_address("alice@enron.com");
        let b = graph.add_address("alice@enron.com");
        assert_eq!(a, b);
        assert_eq!(graph.address_count(), 1);
    }

    #[test]
    fn repeated_correspondence_merges_edges() {
        let mut graph = CommunicationGraph::new();
        let first = graph.add_correspondence("alice@enron.com", "bob@enron.com", 2);
        let second = graph.add_correspondence("alice@enron.com", "bob@enron.com", 3);

        assert_eq!(first, second);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.graph[first].count, 5);
    }
}
