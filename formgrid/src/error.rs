use thiserror::Error;

use crate::record::RowKey;

/// Errors reported by the grid's key checks and programmatic sorting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The row at `index` has no key of its own.
    #[error("row {index} has no key")]
    MissingKey { index: usize },

    /// Two rows share a key.
    #[error("duplicate row key '{key}' at rows {first} and {second}")]
    DuplicateKey {
        key: RowKey,
        first: usize,
        second: usize,
    },

    /// No column has the given key.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The column exists but is not sortable.
    #[error("column '{0}' is not sortable")]
    NotSortable(String),
}
