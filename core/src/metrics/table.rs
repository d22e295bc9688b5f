use crate::math::stats::StatsHelper;
use crate::metrics::record::MetricsRow;
use crate::prelude::{ReportError, ReportResult};
use crate::telemetry::log::ProgressLog;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Row-per-timestep metrics for a single algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    source: PathBuf,
    rows: Vec<MetricsRow>,
}

impl MetricsTable {
    pub fn new(source: impl Into<PathBuf>, rows: Vec<MetricsRow>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    /// Reads a metrics CSV, resolving columns by header name.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(ReportError::MissingInputFile(path_ref.to_path_buf()));
        }
        let file = File::open(path_ref)?;
        Self::from_reader(path_ref, BufReader::new(file))
    }

    pub fn from_reader<R: Read>(source: &Path, reader: R) -> ReportResult<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in MetricsRow::REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ReportError::MissingColumn {
                    path: source.to_path_buf(),
                    column,
                });
            }
        }

        let rows = reader
            .deserialize::<MetricsRow>()
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("loaded {} rows from {}", rows.len(), source.display());

        Ok(Self::new(source, rows))
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn rows(&self) -> &[MetricsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&MetricsRow> {
        self.rows.last()
    }

    pub fn max_time(&self) -> Option<f64> {
        self.rows.iter().map(|row| row.time).reduce(f64::max)
    }

    /// Largest gap, in percentage points, between the accuracy derived from
    /// `CumulativeTP` and the exported `DA` column.
    pub fn accuracy_divergence(&self, total_outliers: u64) -> f64 {
        self.rows
            .iter()
            .map(|row| {
                let derived = StatsHelper::percentage_of(row.cumulative_tp, total_outliers);
                (derived - StatsHelper::fraction_to_percent(row.da)).abs()
            })
            .fold(0.0, f64::max)
    }
}

/// Loads a metrics file, turning a missing file into an absent table.
pub fn load_metrics<P: AsRef<Path>, W: Write>(
    path: P,
    progress: &ProgressLog<W>,
) -> ReportResult<Option<MetricsTable>> {
    match MetricsTable::load(path) {
        Ok(table) => Ok(Some(table)),
        Err(ReportError::MissingInputFile(missing)) => {
            progress.warn(&format!("Warning: {} not found", missing.display()));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SIMULATION_CSV: &str = "Time,DA,FAR,CumulativeTP,CumulativeFP\n\
        0.00,0.0000,0.0000,0,0\n\
        50.00,0.5000,0.0100,500,12\n\
        100.00,0.9500,0.0200,950,20\n";

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp
    }

    #[test]
    fn load_reads_simulation_export() {
        let temp = write_csv(SIMULATION_CSV);
        let table = MetricsTable::load(temp.path()).unwrap();
        assert_eq!(table.len(), 3);
        let last = table.last().unwrap();
        assert_eq!(last.cumulative_tp, 950);
        assert_eq!(last.far, 0.02);
        assert_eq!(last.da, 0.95);
        assert_eq!(last.cumulative_fp, Some(20));
        assert_eq!(table.max_time(), Some(100.0));
    }

    #[test]
    fn load_accepts_files_without_false_positive_counts() {
        let temp = write_csv("Time,CumulativeTP,FAR,DA\n10,5,0.1,0.005\n");
        let table = MetricsTable::load(temp.path()).unwrap();
        assert_eq!(table.rows()[0], MetricsRow::new(10.0, 5, 0.1, 0.005));
    }

    #[test]
    fn load_rejects_missing_required_column() {
        let temp = write_csv("Time,DA,CumulativeTP\n0,0,0\n");
        let err = MetricsTable::load(temp.path()).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { column: "FAR", .. }));
    }

    #[test]
    fn load_propagates_non_numeric_values() {
        let temp = write_csv("Time,CumulativeTP,FAR,DA\nsoon,1,0.0,0.0\n");
        assert!(matches!(
            MetricsTable::load(temp.path()),
            Err(ReportError::Csv(_))
        ));
    }

    #[test]
    fn load_metrics_warns_and_treats_missing_file_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics_od.csv");
        let progress = ProgressLog::with_sink(Vec::new());
        let table = load_metrics(&path, &progress).unwrap();
        assert!(table.is_none());
        let out = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(out, format!("Warning: {} not found\n", path.display()));
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let temp = write_csv("Time,CumulativeTP,FAR,DA\n");
        let table = MetricsTable::load(temp.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max_time(), None);
    }

    #[test]
    fn divergence_is_rounding_sized_for_consistent_exports() {
        let temp = write_csv(SIMULATION_CSV);
        let table = MetricsTable::load(temp.path()).unwrap();
        assert!(table.accuracy_divergence(1000) < 1e-9);
        assert!((table.accuracy_divergence(500) - 95.0).abs() < 1e-9);
    }
}
