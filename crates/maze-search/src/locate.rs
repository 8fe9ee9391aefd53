//! Start-marker location and uniqueness validation.

use maze_grid::{Alphabet, Grid, GridPos};

use crate::error::{SearchError, SearchResult};

/// Find the unique start marker in `grid`.
///
/// Scans every cell once in row-major order.  Fails with
/// [`SearchError::NoStart`] if no cell carries `symbols.start`, and with
/// [`SearchError::MultipleStarts`] as soon as a second one is seen.
///
/// Pure function of the grid contents; scan order never affects the result
/// since at most one marker is tolerated.
pub fn locate_start(grid: &Grid, symbols: Alphabet) -> SearchResult<GridPos> {
    let mut found: Option<GridPos> = None;

    for pos in grid.positions() {
        if symbols.is_start(grid.at(pos)) {
            match found {
                Some(first) => {
                    return Err(SearchError::MultipleStarts { first, second: pos });
                }
                None => found = Some(pos),
            }
        }
    }

    found.ok_or(SearchError::NoStart)
}
