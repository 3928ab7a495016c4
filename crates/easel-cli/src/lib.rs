//! CLI library components for the painting-table reconciler.

pub mod logging;
pub mod pipeline;
