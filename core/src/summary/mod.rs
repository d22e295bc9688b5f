pub mod table;

pub use table::{AlgorithmSummary, ComparisonSummary};
