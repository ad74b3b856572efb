use crate::error::Result;
use crate::scanner::{FileScanner, ScanOptions};
use crate::stats::CorpusStats;
use mailgraph_graph::{CommunicationGraph, EdgeAggregator};
use mailgraph_mailbox::{MessageParser, ParseOutcome, ParserConfig, SeenIdentifiers};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Snapshot handed to progress callbacks after each file
pub struct ScanProgress<'a> {
    pub path: &'a Path,
    pub stats: &'a CorpusStats,
}

/// Result of a full corpus pass
#[derive(Debug)]
pub struct CorpusRun {
    pub graph: CommunicationGraph,
    pub stats: CorpusStats,
}

/// Single-threaded walk -> parse -> dedup -> aggregate pipeline
pub struct CorpusIndexer {
    root: PathBuf,
    scan_options: ScanOptions,
    parser: MessageParser,
}

impl CorpusIndexer {
    pub fn new(root: impl AsRef<Path>, config: ParserConfig) -> Result<Self> {
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            scan_options: ScanOptions::default(),
            parser: MessageParser::new(config)?,
        })
    }

    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.scan_options = options;
        self
    }

    /// Process the whole corpus
    pub fn run(&self) -> Result<CorpusRun> {
        self.run_with_progress(|_| {})
    }

    /// Process the whole corpus, reporting after every file
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> Result<CorpusRun>
    where
        F: FnMut(&ScanProgress<'_>),
    {
        let start = Instant::now();
        let mut stats = CorpusStats::new();
        let mut seen = SeenIdentifiers::new();
        let mut aggregator = EdgeAggregator::new();

        log::info!("Scanning mail corpus at {}", self.root.display());
        let walk = FileScanner::with_options(&self.root, self.scan_options).walk()?;

        for path in walk {
            stats.files_scanned += 1;
            self.ingest_file(&path, &mut seen, &mut aggregator, &mut stats);
            on_progress(&ScanProgress {
                path: &path,
                stats: &stats,
            });
        }

        let graph = aggregator.finalize();

        #[allow(clippy::cast_possible_truncation)]
        {
            stats.time_ms = start.elapsed().as_millis() as u64;
        }
        log::info!(
            "Corpus scan completed: {} files, {} messages, {} duplicates, {} pairs",
            stats.files_scanned,
            stats.messages,
            stats.duplicates,
            stats.pairs_recorded
        );

        Ok(CorpusRun { graph, stats })
    }

    fn ingest_file(
        &self,
        path: &Path,
        seen: &mut SeenIdentifiers,
        aggregator: &mut EdgeAggregator,
        stats: &mut CorpusStats,
    ) {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                stats.add_error(format!("{}: {e}", path.display()));
                return;
            }
        };

        let message = match self.parser.parse_bytes(&bytes, seen) {
            ParseOutcome::Duplicate { message_id } => {
                log::debug!("Skipping duplicate {message_id} in {}", path.display());
                stats.duplicates += 1;
                return;
            }
            ParseOutcome::Message(message) => message,
        };
        stats.messages += 1;

        let Some(sender) = message.sender() else {
            log::debug!("No sender line in {}", path.display());
            stats.missing_sender += 1;
            return;
        };

        stats.add_record(aggregator.record(sender, &message.recipients));
    }
}
