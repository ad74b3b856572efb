//! Edge table output.
//!
//! The CSV layout is fixed: a `source,target,count` header (written even for
//! an empty graph), no index column, rows in (source, target) order. Given
//! the same rows the bytes written are identical across runs.

use crate::error::{GraphError, Result};
use crate::types::EdgeRow;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const HEADER: [&str; 3] = ["source", "target", "count"];

/// On-disk format of the edge table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeTableFormat {
    #[default]
    Csv,
    Json,
}

impl EdgeTableFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            EdgeTableFormat::Csv => "csv",
            EdgeTableFormat::Json => "json",
        }
    }
}

impl FromStr for EdgeTableFormat {
    type Err = GraphError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(EdgeTableFormat::Csv),
            "json" => Ok(EdgeTableFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write rows to `path`, creating parent directories; returns rows written
pub fn write_edge_table(path: &Path, rows: &[EdgeRow], format: EdgeTableFormat) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(path)?);
    match format {
        EdgeTableFormat::Csv => write_csv(&mut out, rows)?,
        EdgeTableFormat::Json => write_json(&mut out, rows)?,
    }
    out.flush()?;

    log::info!(
        "Wrote {} edges to {} ({})",
        rows.len(),
        path.display(),
        format.as_str()
    );
    Ok(rows.len())
}

pub fn write_csv<W: Write>(out: W, rows: &[EdgeRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, rows: &[EdgeRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    Ok(())
}
