//! Fuzzy reconciliation pipeline for the painting tables.
//!
//! Three stages with non-trivial behavior live here: the thresholded fuzzy
//! left join, first-wins deduplication per (title, season), and the
//! orchestrator that sequences the two merge passes with the final sort.
//! Every stage takes tables by reference and returns a fresh table.

pub mod dedupe;
pub mod merge;
pub mod pipeline;
pub mod sort;

pub use dedupe::dedupe_by_group;
pub use merge::{MatchOptions, MergeKeys, MergeStats, fuzzy_left_merge};
pub use pipeline::{PipelineOptions, PipelineOutcome, columns, reconcile};
pub use sort::sort_by_numeric;
