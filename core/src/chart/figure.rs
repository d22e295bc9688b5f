use crate::math::stats::StatsHelper;
use crate::metrics::{ComparisonPair, MetricsRow, MetricsTable};
use crate::prelude::Algorithm;
use std::ops::Range;

/// Fixed accuracy axis, leaving headroom above 100%.
const ACCURACY_RANGE: Range<f64> = 0.0..105.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    LowerRight,
    UpperRight,
}

/// The three comparison figures of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    /// Accuracy derived from `CumulativeTP` over the injected outlier count.
    DetectionAccuracy,
    FalseAlarmRate,
    /// Accuracy read straight from the exported `DA` column.
    DetectionAccuracyDirect,
}

impl Figure {
    /// Render order.
    pub const ALL: [Figure; 3] = [
        Figure::DetectionAccuracy,
        Figure::FalseAlarmRate,
        Figure::DetectionAccuracyDirect,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Figure::DetectionAccuracy => "fig4_detection_accuracy.png",
            Figure::FalseAlarmRate => "fig5_false_alarm_rate.png",
            Figure::DetectionAccuracyDirect => "fig4b_da_percentage.png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Figure::DetectionAccuracy | Figure::DetectionAccuracyDirect => {
                "Detection Accuracy vs. Simulation Time"
            }
            Figure::FalseAlarmRate => "False Alarm Rate vs. Simulation Time",
        }
    }

    pub fn x_label(self) -> &'static str {
        "Simulation Time (s)"
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Figure::DetectionAccuracy | Figure::DetectionAccuracyDirect => {
                "Detection Accuracy (%)"
            }
            Figure::FalseAlarmRate => "False Alarm Rate (%)",
        }
    }

    pub fn legend_corner(self) -> LegendCorner {
        match self {
            Figure::FalseAlarmRate => LegendCorner::UpperRight,
            _ => LegendCorner::LowerRight,
        }
    }

    /// Whether the figure draws the darker translucent grid.
    pub fn overlay_grid(self) -> bool {
        matches!(self, Figure::FalseAlarmRate)
    }

    /// Plotted y value, in percent, for one row.
    pub fn value(self, row: &MetricsRow, total_outliers: u64) -> f64 {
        match self {
            Figure::DetectionAccuracy => {
                StatsHelper::percentage_of(row.cumulative_tp, total_outliers)
            }
            Figure::FalseAlarmRate => StatsHelper::fraction_to_percent(row.far),
            Figure::DetectionAccuracyDirect => StatsHelper::fraction_to_percent(row.da),
        }
    }

    pub fn y_range(self, series: &[PlottedSeries]) -> Range<f64> {
        match self {
            Figure::FalseAlarmRate => {
                let values = series
                    .iter()
                    .flat_map(|s| s.points.iter().map(|&(_, y)| y));
                0.0..StatsHelper::padded_ceiling(values, 1.0)
            }
            _ => ACCURACY_RANGE,
        }
    }
}

/// One algorithm's points for a figure plus its marker placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    pub algorithm: Algorithm,
    pub points: Vec<(f64, f64)>,
    pub marker_stride: usize,
}

impl PlottedSeries {
    pub fn from_table(
        figure: Figure,
        algorithm: Algorithm,
        table: &MetricsTable,
        total_outliers: u64,
    ) -> Self {
        let points = table
            .rows()
            .iter()
            .map(|row| (row.time, figure.value(row, total_outliers)))
            .collect();
        Self {
            algorithm,
            points,
            marker_stride: StatsHelper::marker_stride(table.len()),
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied().step_by(self.marker_stride)
    }
}

/// Series for every present table, in report order.
pub fn build_series(
    figure: Figure,
    pair: &ComparisonPair,
    total_outliers: u64,
) -> Vec<PlottedSeries> {
    pair.present()
        .map(|(algorithm, table)| {
            PlottedSeries::from_table(figure, algorithm, table, total_outliers)
        })
        .collect()
}

/// Shared time axis starting at zero.
pub fn x_range(series: &[PlottedSeries]) -> Range<f64> {
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(x, _)| x))
        .filter(|x| x.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        0.0..max
    } else {
        0.0..1.0
    }
}
