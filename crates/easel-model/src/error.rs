use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("missing column '{column}'")]
    MissingColumn { column: String },
    #[error("row has {found} cells but table has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}

impl TableError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
