use std::fmt;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

/// Which of the two uploaded catalogs a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    New,
    Old,
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSide::New => write!(f, "new table"),
            TableSide::Old => write!(f, "old table"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{table}: no columns to parse from input")]
    EmptyInput { table: TableSide },

    #[error("{table}: parse error at row {row}: {reason}")]
    Parse {
        table: TableSide,
        row: u64,
        reason: String,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl SheetError {
    /// Map a csv crate error onto a parse error for the given table.
    pub(crate) fn from_csv(table: TableSide, err: csv::Error, fallback_row: u64) -> Self {
        let reason = err.to_string();
        let pos = err.position().cloned();

        match err.into_kind() {
            csv::ErrorKind::Io(e) => SheetError::Io(e),
            _ => {
                // csv positions count records from zero, header included
                let row = pos.map(|p| p.record() + 1).unwrap_or(fallback_row);
                SheetError::Parse { table, row, reason }
            }
        }
    }
}
