use clap::ValueEnum;
use mailgraph_graph::EdgeTableFormat;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum FormatFlag {
    Csv,
    Json,
}

impl FormatFlag {
    pub(crate) const fn as_domain(self) -> EdgeTableFormat {
        match self {
            FormatFlag::Csv => EdgeTableFormat::Csv,
            FormatFlag::Json => EdgeTableFormat::Json,
        }
    }
}
