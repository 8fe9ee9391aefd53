//! Neighbor generation and the breadth-first search driver.
//!
//! # Why BFS needs no distance labels
//!
//! The queue is strictly FIFO and every enqueued cell is exactly one step
//! from the cell that enqueued it, so cells are dequeued in non-decreasing
//! distance from the start.  The first target dequeued is therefore at
//! minimum distance among all reachable targets — the FIFO order *is* the
//! distance label.
//!
//! # Memory
//!
//! Per call: one `Vec<bool>` visited array and one `VecDeque<GridPos>`,
//! both sized O(rows × cols), both dropped on return.  The grid itself is
//! only read, so concurrent searches over the same grid are safe.

use std::collections::VecDeque;

use maze_grid::{Alphabet, Dir, Grid, GridPos};

use crate::error::{SearchError, SearchResult};
use crate::locate::locate_start;

/// The walkable 4-directional neighbors of `pos`, lazily, in up/down/left/
/// right order.
///
/// A candidate is yielded iff it lies inside the grid and its symbol is not
/// `symbols.wall`.  Start and target symbols are walkable like open space.
/// Never fails; a cell fully enclosed by walls yields nothing.
#[inline]
pub fn neighbors(
    grid: &Grid,
    symbols: Alphabet,
    pos: GridPos,
) -> impl Iterator<Item = GridPos> + '_ {
    Dir::ALL.into_iter().filter_map(move |dir| {
        let candidate = pos.step(dir)?;
        (grid.contains(candidate) && !symbols.is_wall(grid.at(candidate)))
            .then_some(candidate)
    })
}

/// Find the nearest reachable cell whose symbol is `symbols.target`.
///
/// Validates the start via [`locate_start`] (propagating its failures
/// unchanged), then runs an unweighted BFS from it.  Among targets tied at
/// the same distance, the one reached first under up/down/left/right
/// expansion order is returned; callers should rely only on *a* nearest
/// target being produced, not on which of several ties.
///
/// If the start cell's own symbol is the target symbol, distance 0 is a
/// valid answer — the start is dequeued and checked like any other cell.
/// (Under the default alphabet start and target are distinct symbols, so
/// this only arises with a custom alphabet.)
///
/// # Example
///
/// ```
/// use maze_grid::{Alphabet, Grid, GridPos};
/// use maze_search::nearest_target;
///
/// let grid = Grid::from_lines(
///     "oooocwco\n\
///      woowwcwo\n\
///      ooooRwoo\n\
///      oowwwooo\n\
///      oooocooo",
/// ).unwrap();
/// let found = nearest_target(&grid, Alphabet::DEFAULT).unwrap();
/// assert_eq!(found, GridPos::new(0, 4));
/// ```
pub fn nearest_target(grid: &Grid, symbols: Alphabet) -> SearchResult<GridPos> {
    let start = locate_start(grid, symbols)?;

    // visited[grid.index(pos)] — fresh per call, never shared.
    let mut visited = vec![false; grid.cell_count()];
    let mut queue: VecDeque<GridPos> = VecDeque::new();
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        let slot = grid.index(pos);

        // A cell may be enqueued more than once before its first visit;
        // duplicates are discarded here rather than filtered at enqueue.
        if visited[slot] {
            continue;
        }
        visited[slot] = true;

        if symbols.is_target(grid.at(pos)) {
            return Ok(pos);
        }

        for next in neighbors(grid, symbols, pos) {
            if !visited[grid.index(next)] {
                queue.push_back(next);
            }
        }
    }

    Err(SearchError::NoTargetReachable { start })
}
