use anyhow::Context;
use odacore::chart::{ChartStyle, Figure};
use odacore::prelude::Algorithm;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub dir: PathBuf,
    pub total_outliers: u64,
    pub summary_json: Option<PathBuf>,
    pub style: ChartStyle,
}

impl ReportConfig {
    pub fn from_args(
        dir: PathBuf,
        total_outliers: u64,
        summary_json: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(total_outliers > 0, "total outliers must be positive");
        Ok(Self {
            dir,
            total_outliers,
            summary_json,
            style: ChartStyle::default(),
        })
    }

    /// Replaces the default style with one read from YAML; missing keys keep
    /// their defaults.
    pub fn with_style_file<P: AsRef<Path>>(mut self, path: P) -> anyhow::Result<Self> {
        self.style = Self::load_style(path)?;
        Ok(self)
    }

    pub fn load_style<P: AsRef<Path>>(path: P) -> anyhow::Result<ChartStyle> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading chart style {}", path_ref.display()))?;
        let style: ChartStyle = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing chart style {}", path_ref.display()))?;
        style
            .validate()
            .with_context(|| format!("validating chart style {}", path_ref.display()))?;
        Ok(style)
    }

    pub fn input_path(&self, algorithm: Algorithm) -> PathBuf {
        self.dir.join(algorithm.metrics_file())
    }

    pub fn output_path(&self, figure: Figure) -> PathBuf {
        self.dir.join(figure.file_name())
    }
}
