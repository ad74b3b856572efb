use mailgraph_graph::{CommunicationGraph, EdgeRow};
use mailgraph_indexer::CorpusStats;
use serde::Serialize;
use std::path::Path;

/// Machine-readable summary of one run (`--json`)
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub root: String,
    pub output: String,
    pub format: &'static str,
    pub addresses: usize,
    pub edges: usize,
    pub total_messages: u64,
    pub dropped_self_loops: usize,
    pub heaviest: Vec<EdgeRow>,
    pub stats: CorpusStats,
}

impl RunSummary {
    pub fn new(
        root: &Path,
        output: &Path,
        format: &'static str,
        graph: &CommunicationGraph,
        stats: CorpusStats,
        top: usize,
    ) -> Self {
        Self {
            root: root.display().to_string(),
            output: output.display().to_string(),
            format,
            addresses: graph.address_count(),
            edges: graph.edge_count(),
            total_messages: graph.total_messages(),
            dropped_self_loops: graph.dropped_self_loops,
            heaviest: graph.heaviest(top),
            stats,
        }
    }
}

pub fn render_summary(summary: &RunSummary) -> String {
    let stats = &summary.stats;
    let mut text = String::new();
    text.push_str(&format!(
        "Scanned {} files under {} in {} ms\n",
        stats.files_scanned, summary.root, stats.time_ms
    ));
    text.push_str(&format!(
        "  messages: {}  duplicates: {}  no sender: {}  read errors: {}\n",
        stats.messages,
        stats.duplicates,
        stats.missing_sender,
        stats.read_errors()
    ));
    text.push_str(&format!(
        "  rejected senders: {}  rejected recipients: {}\n",
        stats.rejected_senders, stats.rejected_recipients
    ));
    text.push_str(&format!(
        "Graph: {} addresses, {} edges, {} messages ({} self-loops dropped)\n",
        summary.addresses, summary.edges, summary.total_messages, summary.dropped_self_loops
    ));
    for row in &summary.heaviest {
        text.push_str(&format!(
            "  {:>6}  {} -> {}\n",
            row.count, row.source, row.target
        ));
    }
    text.push_str(&format!("Wrote {} ({})", summary.output, summary.format));
    text
}
