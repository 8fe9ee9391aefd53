//! `maze-search` — shortest-reachable-target search over a character grid.
//!
//! Given a [`Grid`](maze_grid::Grid) holding exactly one start marker, finds
//! the grid cell nearest to it (in unweighted 4-directional steps, walls
//! impassable) whose symbol is the target symbol.  Only the location is
//! returned, never the route.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`locate`] | `locate_start` (exactly-one start enforcement)    |
//! | [`search`] | `neighbors`, `nearest_target` (BFS driver)        |
//! | [`error`]  | `SearchError`, `SearchResult<T>`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod error;
pub mod locate;
pub mod search;


pub use error::{SearchError, SearchResult};
pub use locate::locate_start;
pub use search::{nearest_target, neighbors};
