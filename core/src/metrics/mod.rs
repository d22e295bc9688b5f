pub mod pair;
pub mod record;
pub mod table;

pub use pair::ComparisonPair;
pub use record::MetricsRow;
pub use table::{load_metrics, MetricsTable};
