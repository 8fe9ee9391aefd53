//! Grid-construction error type.

use thiserror::Error;

/// Errors produced by `maze-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row:      usize,
        expected: usize,
        found:    usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
