//! Search-subsystem error type.

use thiserror::Error;

use maze_grid::GridPos;

/// Errors produced by `maze-search`.
///
/// The three kinds are mutually exclusive: a grid fails start validation
/// with exactly one of the first two, and only a grid with a unique start
/// can fail with the third.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No start marker anywhere in the grid (including the empty grid).
    #[error("no start marker found in grid")]
    NoStart,

    /// More than one start marker; `second` is the first duplicate seen in
    /// row-major scan order.
    #[error("multiple start markers: first at {first}, second at {second}")]
    MultipleStarts { first: GridPos, second: GridPos },

    /// The start is unique but breadth-first exploration exhausted every
    /// reachable cell without dequeuing a target.
    #[error("no target reachable from start at {start}")]
    NoTargetReachable { start: GridPos },
}

pub type SearchResult<T> = Result<T, SearchError>;
