use crate::workflow::config::ReportConfig;
use anyhow::Context;
use log::debug;
use odacore::chart::{build_series, ChartRenderer, Figure};
use odacore::metrics::{load_metrics, ComparisonPair};
use odacore::prelude::Algorithm;
use odacore::summary::ComparisonSummary;
use odacore::telemetry::ProgressLog;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct RunOutcome {
    pub figures: Vec<PathBuf>,
    pub summary: ComparisonSummary,
}

#[derive(Clone)]
pub struct Runner {
    config: ReportConfig,
}

impl Runner {
    /// Resolves the report directory once so every printed path shares it.
    pub fn new(mut config: ReportConfig) -> Self {
        if let Ok(resolved) = fs::canonicalize(&config.dir) {
            config.dir = resolved;
        }
        Self { config }
    }

    pub fn execute<W: Write>(&self, progress: &ProgressLog<W>) -> anyhow::Result<RunOutcome> {
        let dir = &self.config.dir;

        progress.record("Generating paper-style comparison graphs...");
        progress.record(&format!("Looking for CSV files in: {}", dir.display()));

        let pair = self.load_pair(progress)?;
        for (algorithm, table) in pair.present() {
            debug!(
                "{} accuracy divergence (CumulativeTP vs DA): {:.4} pp",
                algorithm.name(),
                table.accuracy_divergence(self.config.total_outliers)
            );
        }

        let renderer = ChartRenderer::new(&self.config.style);
        let mut figures = Vec::with_capacity(Figure::ALL.len());
        for figure in Figure::ALL {
            let series = build_series(figure, &pair, self.config.total_outliers);
            let path = self.config.output_path(figure);
            renderer
                .render(figure, &series, &path)
                .with_context(|| format!("rendering {}", path.display()))?;
            progress.record(&format!("Saved: {}", path.display()));
            figures.push(path);
        }

        let summary = ComparisonSummary::from_pair(&pair);
        progress.record(&format!("\n{}", summary));

        if let Some(json_path) = &self.config.summary_json {
            summary
                .write_json(json_path)
                .with_context(|| format!("writing summary {}", json_path.display()))?;
            progress.record(&format!("Saved: {}", json_path.display()));
        }

        progress.record(&format!(
            "\nDone! Check the generated PNG files in: {}",
            dir.display()
        ));

        Ok(RunOutcome { figures, summary })
    }

    fn load_pair<W: Write>(&self, progress: &ProgressLog<W>) -> anyhow::Result<ComparisonPair> {
        let load = |algorithm: Algorithm| {
            let path = self.config.input_path(algorithm);
            load_metrics(&path, progress)
                .with_context(|| format!("loading {}", path.display()))
        };
        Ok(ComparisonPair::new(load(Algorithm::OdaMd)?, load(Algorithm::Od)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odacore::chart::ChartStyle;
    use odacore::summary::AlgorithmSummary;
    use std::fmt::Write as _;
    use std::path::Path;

    fn write_metrics(dir: &Path, file: &str, final_tp: u64, final_far: f64) {
        let mut csv = String::from("Time,DA,FAR,CumulativeTP,CumulativeFP\n");
        for step in 0..=10u64 {
            let tp = final_tp * step / 10;
            let far = final_far * step as f64 / 10.0;
            writeln!(
                csv,
                "{:.2},{:.4},{:.4},{},{}",
                step as f64 * 10.0,
                tp as f64 / 1000.0,
                far,
                tp,
                step
            )
            .unwrap();
        }
        fs::write(dir.join(file), csv).unwrap();
    }

    fn runner_for(dir: &Path) -> Runner {
        let mut cfg = ReportConfig::from_args(dir.to_path_buf(), 1000, None).unwrap();
        cfg.style = ChartStyle {
            dpi: 40,
            ..Default::default()
        };
        Runner::new(cfg)
    }

    #[test]
    fn runner_renders_figures_and_final_table() {
        let dir = tempfile::tempdir().unwrap();
        write_metrics(dir.path(), "metrics_odamd.csv", 950, 0.02);
        write_metrics(dir.path(), "metrics_od.csv", 800, 0.05);

        let outcome = runner_for(dir.path()).execute(&ProgressLog::new()).unwrap();
        assert_eq!(outcome.figures.len(), 3);
        for figure in Figure::ALL {
            assert!(dir.path().join(figure.file_name()).exists());
        }
        assert_eq!(outcome.summary.odamd.outliers_detected, 950);
        assert_eq!(outcome.summary.od.outliers_detected, 800);
        assert!((outcome.summary.odamd.detection_accuracy_pct - 95.0).abs() < 1e-9);
        assert!((outcome.summary.od.false_alarm_rate_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn runner_without_inputs_still_writes_empty_charts() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = runner_for(dir.path()).execute(&ProgressLog::new()).unwrap();
        assert_eq!(outcome.figures.len(), 3);
        assert!(outcome.figures.iter().all(|path| path.exists()));
        assert_eq!(outcome.summary.odamd, AlgorithmSummary::default());
        assert_eq!(outcome.summary.od, AlgorithmSummary::default());
    }

    #[test]
    fn runner_console_output_without_inputs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = fs::canonicalize(tmp.path()).unwrap();
        let progress = ProgressLog::with_sink(Vec::new());
        runner_for(tmp.path()).execute(&progress).unwrap();

        let out = String::from_utf8(progress.into_inner()).unwrap();
        let mut expected = format!(
            "Generating paper-style comparison graphs...\n\
             Looking for CSV files in: {d}\n\
             Warning: {d}/metrics_odamd.csv not found\n\
             Warning: {d}/metrics_od.csv not found\n\
             Saved: {d}/fig4_detection_accuracy.png\n\
             Saved: {d}/fig5_false_alarm_rate.png\n\
             Saved: {d}/fig4b_da_percentage.png\n",
            d = dir.display()
        );
        writeln!(expected, "\n{}", ComparisonSummary::default()).unwrap();
        writeln!(expected, "\nDone! Check the generated PNG files in: {}", dir.display()).unwrap();
        assert_eq!(out, expected);
        assert!(out.contains("Total Outliers Detected                 0               0"));
    }

    #[test]
    fn runner_writes_json_summary_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        write_metrics(dir.path(), "metrics_od.csv", 800, 0.05);
        let json_path = dir.path().join("summary.json");

        let mut runner = runner_for(dir.path());
        runner.config.summary_json = Some(json_path.clone());
        runner.execute(&ProgressLog::new()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["od"]["outliers_detected"], 800);
        assert_eq!(json["odamd"]["outliers_detected"], 0);
    }

    #[test]
    fn runner_fails_on_malformed_metrics() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("metrics_od.csv"), "Time,FAR\n0,0.1\n").unwrap();
        assert!(runner_for(dir.path()).execute(&ProgressLog::new()).is_err());
    }
}
