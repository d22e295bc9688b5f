pub struct StatsHelper;

impl StatsHelper {
    /// Target number of markers drawn along a series.
    pub const MARKER_TARGET: usize = 10;

    pub fn percentage_of(count: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        100.0 * count as f64 / total as f64
    }

    pub fn fraction_to_percent(fraction: f64) -> f64 {
        fraction * 100.0
    }

    /// Row stride between markers, never zero.
    pub fn marker_stride(rows: usize) -> usize {
        (rows / Self::MARKER_TARGET).max(1)
    }

    /// Upper axis bound with 5% headroom; `fallback` when nothing positive.
    pub fn padded_ceiling<I: IntoIterator<Item = f64>>(values: I, fallback: f64) -> f64 {
        let max = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            fallback
        }
    }
}
