use crate::math::stats::StatsHelper;
use crate::metrics::{ComparisonPair, MetricsTable};
use crate::prelude::{Algorithm, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Final-row figures for one algorithm; zeros when its metrics are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    pub detection_accuracy_pct: f64,
    pub false_alarm_rate_pct: f64,
    pub outliers_detected: u64,
}

impl AlgorithmSummary {
    pub fn from_table(table: Option<&MetricsTable>) -> Self {
        let Some(table) = table else {
            return Self::default();
        };
        match table.last() {
            Some(last) => Self {
                detection_accuracy_pct: StatsHelper::fraction_to_percent(last.da),
                false_alarm_rate_pct: StatsHelper::fraction_to_percent(last.far),
                outliers_detected: last.cumulative_tp,
            },
            None => {
                log::warn!("{} has no rows; reporting zeros", table.source().display());
                Self::default()
            }
        }
    }
}

/// Side-by-side final metrics printed at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub odamd: AlgorithmSummary,
    pub od: AlgorithmSummary,
}

impl ComparisonSummary {
    pub fn from_pair(pair: &ComparisonPair) -> Self {
        Self {
            odamd: AlgorithmSummary::from_table(pair.get(Algorithm::OdaMd)),
            od: AlgorithmSummary::from_table(pair.get(Algorithm::Od)),
        }
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> ReportResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let (a, b) = (&self.odamd, &self.od);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "              FINAL COMPARISON TABLE")?;
        writeln!(f, "{}", heavy)?;
        writeln!(
            f,
            "{:<25} {:>15} {:>15}",
            "Metric",
            Algorithm::OdaMd.name(),
            Algorithm::Od.name()
        )?;
        writeln!(f, "{}", light)?;
        writeln!(
            f,
            "{:<25} {:>14.2}% {:>14.2}%",
            "Detection Accuracy (%)", a.detection_accuracy_pct, b.detection_accuracy_pct
        )?;
        writeln!(
            f,
            "{:<25} {:>14.2}% {:>14.2}%",
            "False Alarm Rate (%)", a.false_alarm_rate_pct, b.false_alarm_rate_pct
        )?;
        writeln!(
            f,
            "{:<25} {:>15} {:>15}",
            "Total Outliers Detected", a.outliers_detected, b.outliers_detected
        )?;
        write!(f, "{}", heavy)
    }
}
