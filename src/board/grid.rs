//! The immutable board grid and its neighbour queries.
//!
//! The board is toroidal: stepping off one edge re-enters on the opposite
//! edge. Walls are checked on the origin space only, so a wall on the
//! destination's facing side does not block entry.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::space::{Position, Space};
use crate::core::heading::Heading;
use crate::effects::FieldAction;

/// A `width` x `height` grid of spaces, immutable after construction.
///
/// Backed by an `im::Vector` so cloning a board for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    name: String,
    width: usize,
    height: usize,
    /// Row-major: index = y * width + x
    spaces: Vector<Space>,
}

impl Board {
    pub(crate) fn from_parts(name: String, width: usize, height: usize, spaces: Vector<Space>) -> Self {
        debug_assert_eq!(spaces.len(), width * height);
        Self {
            name,
            width,
            height,
            spaces,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Look up a space. Out-of-range coordinates yield `None`.
    #[must_use]
    pub fn space(&self, x: usize, y: usize) -> Option<&Space> {
        self.space_at(Position::new(x, y))
    }

    #[must_use]
    pub fn space_at(&self, position: Position) -> Option<&Space> {
        if self.contains(position) {
            self.spaces.get(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Iterate over all spaces in row-major order.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// The space adjacent to `position` in direction `heading`.
    ///
    /// Wraps around the edges. Returns `None` if the origin space has a wall
    /// on `heading` or `position` is not on the board.
    #[must_use]
    pub fn neighbour(&self, position: Position, heading: Heading) -> Option<Position> {
        let space = self.space_at(position)?;
        if space.has_wall(heading) {
            return None;
        }

        let Position { x, y } = position;
        let next = match heading {
            Heading::South => Position::new(x, (y + 1) % self.height),
            Heading::West => Position::new((x + self.width - 1) % self.width, y),
            Heading::North => Position::new(x, (y + self.height - 1) % self.height),
            Heading::East => Position::new((x + 1) % self.width, y),
        };
        Some(next)
    }

    /// Number of checkpoint actions on the board.
    #[must_use]
    pub fn checkpoint_count(&self) -> usize {
        self.spaces
            .iter()
            .flat_map(|s| s.actions())
            .filter(|a| matches!(a, FieldAction::CheckPoint { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_space_lookup_bounds() {
        let board = BoardBuilder::new(4, 3).build().unwrap();
        assert!(board.space(3, 2).is_some());
        assert!(board.space(4, 0).is_none());
        assert!(board.space(0, 3).is_none());
        assert_eq!(board.spaces().count(), 12);
    }

    #[test]
    fn test_neighbour_wraps() {
        let board = BoardBuilder::new(8, 8).build().unwrap();
        let corner = Position::new(0, 0);

        assert_eq!(board.neighbour(corner, Heading::North), Some(Position::new(0, 7)));
        assert_eq!(board.neighbour(corner, Heading::West), Some(Position::new(7, 0)));
        assert_eq!(board.neighbour(corner, Heading::South), Some(Position::new(0, 1)));
        assert_eq!(board.neighbour(corner, Heading::East), Some(Position::new(1, 0)));
        assert_eq!(board.neighbour(Position::new(7, 7), Heading::East), Some(Position::new(0, 7)));
    }

    #[test]
    fn test_wall_blocks_only_from_origin() {
        let board = BoardBuilder::new(8, 8)
            .wall(Position::new(2, 2), Heading::North)
            .build()
            .unwrap();

        assert_eq!(board.neighbour(Position::new(2, 2), Heading::North), None);
        // The matching wall on the other side is not consulted.
        assert_eq!(board.neighbour(Position::new(2, 1), Heading::South), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_neighbour_off_board() {
        let board = BoardBuilder::new(2, 2).build().unwrap();
        assert_eq!(board.neighbour(Position::new(5, 5), Heading::North), None);
    }

    #[test]
    fn test_checkpoint_count() {
        let board = BoardBuilder::new(5, 5)
            .checkpoint(Position::new(1, 1), 0)
            .checkpoint(Position::new(2, 2), 1)
            .conveyor(Position::new(3, 3), Heading::East)
            .build()
            .unwrap();
        assert_eq!(board.checkpoint_count(), 2);
    }
}
