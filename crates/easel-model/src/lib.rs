//! Data model for the painting-table reconciler.
//!
//! Tables are plain ordered collections: a column-name list plus rows of
//! cells. Pipeline stages consume a table and produce a fresh one; nothing
//! here shares mutable state across stages.

pub mod error;
pub mod table;

pub use error::{Result, TableError};
pub use table::{CellValue, Table};
