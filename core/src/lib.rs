//! Core data model and rendering for the ODA-MD vs OD comparison report.
//!
//! The modules load the per-algorithm metrics exported by the simulation,
//! turn them into plotted series, render the paper figures and build the
//! final comparison table.

pub mod chart;
pub mod math;
pub mod metrics;
pub mod prelude;
pub mod summary;
pub mod telemetry;

pub use prelude::{Algorithm, ReportError, ReportResult};
