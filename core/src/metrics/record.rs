use serde::Deserialize;

/// One timestep of the metrics exported by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricsRow {
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "CumulativeTP")]
    pub cumulative_tp: u64,
    #[serde(rename = "FAR")]
    pub far: f64,
    #[serde(rename = "DA")]
    pub da: f64,
    #[serde(rename = "CumulativeFP", default)]
    pub cumulative_fp: Option<u64>,
}

impl MetricsRow {
    /// Header names every metrics file must carry.
    pub const REQUIRED_COLUMNS: [&'static str; 4] = ["Time", "CumulativeTP", "FAR", "DA"];

    pub fn new(time: f64, cumulative_tp: u64, far: f64, da: f64) -> Self {
        Self {
            time,
            cumulative_tp,
            far,
            da,
            cumulative_fp: None,
        }
    }
}
