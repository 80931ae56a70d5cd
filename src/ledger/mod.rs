//! The statistics ledger: the only code that writes player counters.

pub mod delta;
pub mod reconcile;
pub mod stats_ledger;
pub mod validation;

pub use delta::StatDelta;
pub use stats_ledger::StatsLedger;
