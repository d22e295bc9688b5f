use clap::Parser;
use odacore::prelude::TOTAL_OUTLIERS;
use odacore::telemetry::ProgressLog;
use std::path::PathBuf;
use workflow::config::ReportConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Renders the ODA-MD vs OD comparison figures and table")]
struct Args {
    /// Directory holding metrics_odamd.csv and metrics_od.csv; figures land here too
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Load chart style overrides from YAML
    #[arg(long)]
    style: Option<PathBuf>,
    /// Outliers injected by the simulation (denominator of fig4)
    #[arg(long, default_value_t = TOTAL_OUTLIERS)]
    total_outliers: u64,
    /// Also write the comparison table as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ReportConfig::from_args(args.dir, args.total_outliers, args.summary_json)?;
    if let Some(path) = args.style {
        config = config.with_style_file(path)?;
    }

    let outcome = Runner::new(config).execute(&ProgressLog::new())?;
    log::info!(
        "report complete: {} figures, ODA-MD {} vs OD {} outliers detected",
        outcome.figures.len(),
        outcome.summary.odamd.outliers_detected,
        outcome.summary.od.outliers_detected
    );

    Ok(())
}
