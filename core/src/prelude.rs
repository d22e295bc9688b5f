use std::path::PathBuf;

/// Number of outliers injected by the simulation scenario.
pub const TOTAL_OUTLIERS: u64 = 1000;

/// The two outlier-detection algorithms compared throughout the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    OdaMd,
    Od,
}

impl Algorithm {
    /// Report order: proposed first, baseline second.
    pub const ALL: [Algorithm; 2] = [Algorithm::OdaMd, Algorithm::Od];

    /// Short name used as the comparison table column header.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::OdaMd => "ODA-MD",
            Algorithm::Od => "OD",
        }
    }

    /// Label shown in chart legends.
    pub fn legend_label(self) -> &'static str {
        match self {
            Algorithm::OdaMd => "ODA-MD (Proposed)",
            Algorithm::Od => "OD [Fawzy et al.]",
        }
    }

    /// CSV file written by the simulation for this algorithm.
    pub fn metrics_file(self) -> &'static str {
        match self {
            Algorithm::OdaMd => "metrics_odamd.csv",
            Algorithm::Od => "metrics_od.csv",
        }
    }
}

/// Common error type for loading, rendering and summarising.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("missing input file: {}", .0.display())]
    MissingInputFile(PathBuf),
    #[error("{}: missing required column `{}`", .path.display(), .column)]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("render failure: {0}")]
    Render(String),
    #[error("invalid chart style: {0}")]
    Style(String),
}

pub type ReportResult<T> = Result<T, ReportError>;
