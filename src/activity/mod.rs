//! Activity log for budget-tracker
//!
//! Appends one JSON line per notable event (sample data generated, expense
//! added, balance updated) to `activity.log` in the data directory. The log
//! is informational only; the CSV files remain the source of truth.

mod entry;
mod logger;

pub use entry::{ActivityEntry, ActivityKind};
pub use logger::ActivityLogger;
