//! Cardinal headings and table-driven rotation.
//!
//! Headings are kept in the fixed cyclic order SOUTH, WEST, NORTH, EAST.
//! Turning "right" steps forward through this table and turning "left"
//! steps backward; rotation is never derived geometrically.

use serde::{Deserialize, Serialize};

/// One of the four directions a robot can face or a wall can block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    South,
    West,
    North,
    East,
}

impl Heading {
    /// All headings in rotation order.
    pub const ALL: [Heading; 4] = [Heading::South, Heading::West, Heading::North, Heading::East];

    /// Position of this heading in the rotation table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Heading::South => 0,
            Heading::West => 1,
            Heading::North => 2,
            Heading::East => 3,
        }
    }

    /// Rotate by `steps` positions through the rotation table.
    ///
    /// Negative steps rotate the other way.
    #[must_use]
    pub fn rotated(self, steps: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let idx = (self.index() as i32 + steps).rem_euclid(len);
        Self::ALL[idx as usize]
    }

    /// Heading after a right turn.
    #[must_use]
    pub fn next(self) -> Self {
        self.rotated(1)
    }

    /// Heading after a left turn.
    #[must_use]
    pub fn prev(self) -> Self {
        self.rotated(-1)
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        self.rotated(2)
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::South => "SOUTH",
            Heading::West => "WEST",
            Heading::North => "NORTH",
            Heading::East => "EAST",
        };
        f.write_str(name)
    }
}
