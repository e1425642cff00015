// Engine module - page aggregation and partitioning
// This layer sits between canonical records (types) and CLI presentation

mod classify;
pub mod keymap;
pub mod partition;
mod totals;

pub use classify::{DutyBucket, classify};
pub use keymap::{Key, KeyInput, action_for_key};
pub use partition::{
    Action, Direction, Outcome, PagePartitioner, PageSummary, PartitionSnapshot, Phase,
    VisibleRow,
};

use civlog_types::{FlightRecord, PageTotals};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Aggregate figures for one page's records
pub fn page_totals(records: &[FlightRecord]) -> PageTotals {
    totals::aggregate(records)
}

/// Element-wise sum of page totals; an empty input yields the zero value
pub fn sum_totals<'a, I>(totals: I) -> PageTotals
where
    I: IntoIterator<Item = &'a PageTotals>,
{
    totals.into_iter().sum()
}
