//! Board model: coordinates, spaces, the grid and its construction.
//!
//! ## Key Types
//!
//! - `Position`: Zero-based `(x, y)` coordinate
//! - `Space`: Walls and ordered field actions of one coordinate
//! - `Board`: Immutable toroidal grid with neighbour queries
//! - `BoardBuilder`: Explicit construction from walls and actions
//!
//! Named layouts live in [`presets`].

pub mod builder;
pub mod grid;
pub mod presets;
pub mod space;

pub use builder::BoardBuilder;
pub use grid::Board;
pub use space::{Position, Space};
