//! Immutable rectangular character grid.
//!
//! # Data layout
//!
//! Cells are stored as a single flat `Vec<char>` in row-major order; the
//! cell at `(row, col)` lives at index `row * cols + col`.  A flat buffer
//! keeps cell reads a single bounds-checked index and lets callers size
//! per-search bookkeeping (visited flags) with the same [`index`](Grid::index)
//! scheme — no nested `Vec`s, no per-row indirection.
//!
//! # Rectangularity
//!
//! Both constructors reject ragged input with [`GridError::Ragged`] rather
//! than leaving out-of-bounds reads to surface later: every row must match
//! the first row's length.  Once built, a `Grid` is never mutated.

use crate::error::{GridError, GridResult};
use crate::pos::GridPos;

/// A rectangular maze grid of single-character cells.
///
/// # Example
///
/// ```
/// use maze_grid::{Grid, GridPos};
///
/// let grid = Grid::from_lines("oRo\nwcw").unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.at(GridPos::new(1, 1)), 'c');
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<char>,
    rows:  usize,
    cols:  usize,
}

impl Grid {
    /// Build a grid from rows of cells, validating rectangularity.
    ///
    /// An input with zero rows is a valid (empty) grid.  The first row sets
    /// the expected width; any later row of a different length fails with
    /// [`GridError::Ragged`].
    pub fn from_rows(rows: Vec<Vec<char>>) -> GridResult<Grid> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row:      i,
                    expected: cols,
                    found:    row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Grid { cells, rows: row_count, cols })
    }

    /// Build a grid from newline-separated text, one row per line.
    ///
    /// Same rectangularity contract as [`from_rows`](Self::from_rows).
    /// Useful for tests and fixtures:
    ///
    /// ```
    /// use maze_grid::Grid;
    ///
    /// let grid = Grid::from_lines(
    ///     "oooocwco\n\
    ///      woowwcwo\n\
    ///      ooooRwoo\n\
    ///      oowwwooo\n\
    ///      oooocooo",
    /// ).unwrap();
    /// assert_eq!(grid.rows(), 5);
    /// ```
    pub fn from_lines(text: &str) -> GridResult<Grid> {
        Self::from_rows(text.lines().map(|l| l.chars().collect()).collect())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows × cols`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// `true` if `pos` names a cell inside this grid.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        (pos.row as usize) < self.rows && (pos.col as usize) < self.cols
    }

    /// The symbol at `pos`.  Caller guarantees `contains(pos)`; use
    /// [`get`](Self::get) for checked access.
    #[inline]
    pub fn at(&self, pos: GridPos) -> char {
        self.cells[self.index(pos)]
    }

    /// The symbol at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, pos: GridPos) -> Option<char> {
        self.contains(pos).then(|| self.at(pos))
    }

    /// Flat row-major index of `pos` — also the slot for `pos` in any
    /// caller-side `Vec` sized to [`cell_count`](Self::cell_count).
    #[inline]
    pub fn index(&self, pos: GridPos) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }

    /// Iterator over every cell position in row-major order (row 0 first,
    /// increasing column within each row).
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows as u32)
            .flat_map(move |row| (0..self.cols as u32).map(move |col| GridPos::new(row, col)))
    }
}
