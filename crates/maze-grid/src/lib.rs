//! `maze-grid` — foundational types for the maze-search workspace.
//!
//! This crate is a dependency of every other `maze-*` crate.  It has no
//! `maze-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`pos`]     | `GridPos`, `Dir`                                  |
//! | [`symbols`] | `Alphabet` (cell-symbol alphabet)                 |
//! | [`grid`]    | `Grid` (immutable rectangular character grid)     |
//! | [`error`]   | `GridError`, `GridResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod error;
pub mod grid;
pub mod pos;
pub mod symbols;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use pos::{Dir, GridPos};
pub use symbols::Alphabet;
