//! Grid coordinate type and cardinal directions.
//!
//! `GridPos` is a plain `(row, col)` pair of `u32`s — `Copy + Ord + Hash` so
//! positions can be queued, compared, and used as map keys without ceremony.
//! Identity is purely structural: two `GridPos` values are the same cell iff
//! their components are equal.

use std::fmt;

/// A cell coordinate: row index then column index, both zero-based.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The coordinate one cell away in direction `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant
    /// (up from row 0, left from column 0) or overflow `u32`.  Whether the
    /// result lies inside a *particular* grid is the caller's check — see
    /// `Grid::contains`.
    #[inline]
    pub fn step(self, dir: Dir) -> Option<GridPos> {
        let (row, col) = match dir {
            Dir::Up    => (self.row.checked_sub(1)?, self.col),
            Dir::Down  => (self.row.checked_add(1)?, self.col),
            Dir::Left  => (self.row, self.col.checked_sub(1)?),
            Dir::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(GridPos { row, col })
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Dir ───────────────────────────────────────────────────────────────────────

/// The four cardinal movement directions.
///
/// [`Dir::ALL`] lists them in up/down/left/right order.  Neighbor expansion
/// follows this order, which (with FIFO queueing) fixes the tie-break among
/// equidistant targets and makes searches reproducible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// All directions in expansion order.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
}
