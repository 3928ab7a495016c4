//! CSV boundary collaborators: loading the three source tables and writing
//! the consolidated result. The matching core never touches the filesystem.

pub mod csv_table;

pub use csv_table::{read_csv_table, write_csv_table};
