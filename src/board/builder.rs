//! Board construction.
//!
//! ```
//! use robo_rally::board::{BoardBuilder, Position};
//! use robo_rally::core::Heading;
//!
//! let board = BoardBuilder::new(8, 8)
//!     .named("Practice")
//!     .wall(Position::new(0, 0), Heading::North)
//!     .conveyor(Position::new(3, 3), Heading::East)
//!     .checkpoint(Position::new(6, 6), 0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(board.neighbour(Position::new(0, 0), Heading::North), None);
//! ```

use im::Vector;

use super::grid::Board;
use super::space::{Position, Space};
use crate::core::heading::Heading;
use crate::effects::FieldAction;
use crate::error::{GameError, GameResult};

/// Builds a `Board` with walls and field actions.
///
/// The first out-of-bounds coordinate is remembered and reported by `build`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    name: String,
    width: usize,
    height: usize,
    spaces: Vec<Space>,
    out_of_bounds: Option<Position>,
}

impl BoardBuilder {
    /// Start an empty board. Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be positive");

        let spaces = (0..height)
            .flat_map(|y| (0..width).map(move |x| Space::new(Position::new(x, y))))
            .collect();

        Self {
            name: "defaultboard".to_string(),
            width,
            height,
            spaces,
            out_of_bounds: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Add a wall on `heading` of the space at `position`.
    #[must_use]
    pub fn wall(mut self, position: Position, heading: Heading) -> Self {
        if let Some(space) = self.space_mut(position) {
            space.add_wall(heading);
        }
        self
    }

    /// Attach any field action to the space at `position`.
    #[must_use]
    pub fn action(mut self, position: Position, action: FieldAction) -> Self {
        if let Some(space) = self.space_mut(position) {
            space.add_action(action);
        }
        self
    }

    #[must_use]
    pub fn conveyor(self, position: Position, heading: Heading) -> Self {
        self.action(position, FieldAction::conveyor(heading))
    }

    #[must_use]
    pub fn checkpoint(self, position: Position, number: u32) -> Self {
        self.action(position, FieldAction::checkpoint(number))
    }

    pub fn build(self) -> GameResult<Board> {
        if let Some(Position { x, y }) = self.out_of_bounds {
            return Err(GameError::OutOfBounds { x, y });
        }
        log::debug!("built board {:?} ({}x{})", self.name, self.width, self.height);
        Ok(Board::from_parts(
            self.name,
            self.width,
            self.height,
            Vector::from(self.spaces),
        ))
    }

    fn space_mut(&mut self, position: Position) -> Option<&mut Space> {
        if !self.contains(position) {
            self.out_of_bounds.get_or_insert(position);
            return None;
        }
        self.spaces.get_mut(position.y * self.width + position.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty() {
        let board = BoardBuilder::new(3, 2).build().unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.name(), "defaultboard");
        assert_eq!(board.space(2, 1).map(Space::position), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_out_of_bounds_reported() {
        let result = BoardBuilder::new(4, 4)
            .wall(Position::new(4, 0), Heading::North)
            .checkpoint(Position::new(9, 9), 0)
            .build();

        assert!(matches!(result, Err(GameError::OutOfBounds { x: 4, y: 0 })));
    }

    #[test]
    fn test_actions_attached_in_order() {
        let pos = Position::new(1, 1);
        let board = BoardBuilder::new(4, 4)
            .conveyor(pos, Heading::South)
            .checkpoint(pos, 0)
            .build()
            .unwrap();

        let space = board.space_at(pos).unwrap();
        assert_eq!(
            space.actions(),
            &[FieldAction::conveyor(Heading::South), FieldAction::checkpoint(0)]
        );
    }

    #[test]
    fn test_cloned_builders_diverge() {
        let base = BoardBuilder::new(4, 4).wall(Position::new(0, 0), Heading::East);
        let broken = base.clone().checkpoint(Position::new(7, 1), 0).build();
        let board = base.checkpoint(Position::new(2, 2), 0).build().unwrap();

        assert!(matches!(broken, Err(GameError::OutOfBounds { x: 7, y: 1 })));
        assert!(board.space(0, 0).unwrap().has_wall(Heading::East));
        assert_eq!(board.checkpoint_count(), 1);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_width() {
        let _ = BoardBuilder::new(0, 4);
    }
}
