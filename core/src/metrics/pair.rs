use crate::metrics::table::MetricsTable;
use crate::prelude::Algorithm;

/// Proposed and baseline metrics compared side by side.
#[derive(Debug, Clone, Default)]
pub struct ComparisonPair {
    pub odamd: Option<MetricsTable>,
    pub od: Option<MetricsTable>,
}

impl ComparisonPair {
    pub fn new(odamd: Option<MetricsTable>, od: Option<MetricsTable>) -> Self {
        Self { odamd, od }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&MetricsTable> {
        match algorithm {
            Algorithm::OdaMd => self.odamd.as_ref(),
            Algorithm::Od => self.od.as_ref(),
        }
    }

    /// Present tables in report order.
    pub fn present(&self) -> impl Iterator<Item = (Algorithm, &MetricsTable)> {
        Algorithm::ALL
            .into_iter()
            .filter_map(move |algorithm| self.get(algorithm).map(|table| (algorithm, table)))
    }
}
