//! # Mailgraph Graph
//!
//! Weighted, directed "who wrote to whom" graph built from parsed messages.
//!
//! ## Architecture
//!
//! ```text
//! (sender, recipients) per message
//!     │
//!     ├──> Edge Aggregator
//!     │      ├─ Validate sender / each recipient
//!     │      └─ Append raw pairs
//!     │
//!     ├──> finalize() (single terminal step)
//!     │      ├─ Group by (source, target), sum
//!     │      └─ Drop self-loops
//!     │
//!     ├──> Communication Graph (petgraph)
//!     │      ├─ Nodes: addresses
//!     │      └─ Edges: message counts
//!     │
//!     └──> Edge table export (CSV / JSON)
//! ```

mod builder;
mod error;
mod export;
mod graph;
mod types;

pub use builder::{EdgeAggregator, RecordOutcome};
pub use error::{GraphError, Result};
pub use export::{write_csv, write_edge_table, write_json, EdgeTableFormat};
pub use types::{AddressNode, CommunicationGraph, Correspondence, EdgeRow};
