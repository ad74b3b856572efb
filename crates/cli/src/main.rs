use anyhow::{Context, Result};
use clap::Parser;
use flags::FormatFlag;
use indicatif::{ProgressBar, ProgressStyle};
use mailgraph_graph::write_edge_table;
use mailgraph_indexer::{CorpusIndexer, ScanOptions};
use mailgraph_mailbox::{DedupPolicy, ParserConfig};
use report::{render_summary, RunSummary};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

mod flags;
mod report;

const DEFAULT_ROOT: &str = "maildir/";
const DEFAULT_OUTPUT: &str = "email_adjacency.csv";

#[derive(Parser)]
#[command(name = "mailgraph")]
#[command(about = "Build a sender -> recipient count graph from a mail corpus", long_about = None)]
#[command(version)]
struct Cli {
    /// Corpus root directory (default: $MAILGRAPH_ROOT or maildir/)
    root: Option<PathBuf>,

    /// Output file (default: $MAILGRAPH_OUTPUT or email_adjacency.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: FormatFlag,

    /// TOML file with parser markers, sender domain and dedup policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Required sender domain, e.g. @enron.com (empty string disables the filter)
    #[arg(long)]
    sender_domain: Option<String>,

    /// Only start duplicate lookups after two identifiers are recorded
    #[arg(long)]
    legacy_dedup: bool,

    /// Walk directories in file-name order
    #[arg(long)]
    sorted: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,

    /// Show a progress spinner on stderr
    #[arg(short, long)]
    progress: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Number of heaviest edges to include in the summary
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = parser_config(&cli)?;
    let root = cli
        .root
        .clone()
        .or_else(|| env::var_os("MAILGRAPH_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let output = cli
        .output
        .clone()
        .or_else(|| env::var_os("MAILGRAPH_OUTPUT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let format = cli.format.as_domain();

    let indexer = CorpusIndexer::new(&root, config)
        .context("Invalid parser configuration")?
        .with_scan_options(ScanOptions {
            sorted: cli.sorted,
            follow_links: cli.follow_links,
        });

    let spinner = cli.progress.then(new_spinner).transpose()?;
    let run = indexer
        .run_with_progress(|progress| {
            if let Some(spinner) = &spinner {
                let stats = progress.stats;
                spinner.set_message(format!(
                    "{} files, {} messages, {} duplicates",
                    stats.files_scanned, stats.messages, stats.duplicates
                ));
            }
        })
        .with_context(|| format!("Failed to scan corpus at {}", root.display()))?;
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let rows = run.graph.rows();
    write_edge_table(&output, &rows, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let summary = RunSummary::new(&root, &output, format.as_str(), &run.graph, run.stats, cli.top);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in render_summary(&summary).lines() {
            log::info!("{line}");
        }
    }

    Ok(())
}

fn parser_config(cli: &Cli) -> Result<ParserConfig> {
    let mut config = match &cli.config {
        Some(path) => ParserConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ParserConfig::default(),
    };

    if let Some(domain) = &cli.sender_domain {
        config.sender_domain = domain.clone();
    }
    if cli.legacy_dedup {
        config.dedup = DedupPolicy::Legacy;
    }

    Ok(config)
}

fn new_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg}")
            .context("Invalid progress template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}
