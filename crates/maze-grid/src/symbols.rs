//! The closed cell-symbol alphabet.
//!
//! Four symbols carry meaning: the start marker (expected exactly once), open
//! space, walls, and targets.  Any *other* symbol in a grid is treated as
//! walkable — the only traversal filter is "not a wall".

/// The four meaningful cell symbols of a maze grid.
///
/// Construct with struct syntax for a custom alphabet, or use
/// [`Alphabet::DEFAULT`] for the conventional `R`/`o`/`w`/`c` encoding.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alphabet {
    /// Marks the search origin.  A well-formed grid contains exactly one.
    pub start:  char,
    /// Walkable empty space.
    pub open:   char,
    /// Impassable cell, excluded from the traversal graph.
    pub wall:   char,
    /// Walkable cell that satisfies the search goal.
    pub target: char,
}

impl Alphabet {
    /// The conventional encoding: `R` start, `o` open, `w` wall, `c` target.
    pub const DEFAULT: Alphabet = Alphabet {
        start:  'R',
        open:   'o',
        wall:   'w',
        target: 'c',
    };

    #[inline]
    pub fn is_start(&self, symbol: char) -> bool {
        symbol == self.start
    }

    #[inline]
    pub fn is_wall(&self, symbol: char) -> bool {
        symbol == self.wall
    }

    #[inline]
    pub fn is_target(&self, symbol: char) -> bool {
        symbol == self.target
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
