//! Board coordinates and individual spaces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::heading::Heading;
use crate::effects::FieldAction;

/// Zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single board space: its walls and its field actions.
///
/// Occupancy is not stored here; the game state keeps an occupancy index
/// so the board itself stays immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    position: Position,
    walls: SmallVec<[Heading; 4]>,
    actions: SmallVec<[FieldAction; 2]>,
}

impl Space {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            walls: SmallVec::new(),
            actions: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Walls on this space. Never contains duplicates.
    #[must_use]
    pub fn walls(&self) -> &[Heading] {
        &self.walls
    }

    #[must_use]
    pub fn has_wall(&self, heading: Heading) -> bool {
        self.walls.contains(&heading)
    }

    /// Field actions in the order they fire.
    #[must_use]
    pub fn actions(&self) -> &[FieldAction] {
        &self.actions
    }

    pub(crate) fn add_wall(&mut self, heading: Heading) {
        if !self.has_wall(heading) {
            self.walls.push(heading);
        }
    }

    pub(crate) fn add_action(&mut self, action: FieldAction) {
        self.actions.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_have_no_duplicates() {
        let mut space = Space::new(Position::new(1, 2));
        space.add_wall(Heading::North);
        space.add_wall(Heading::North);
        space.add_wall(Heading::East);

        assert_eq!(space.walls(), &[Heading::North, Heading::East]);
        assert!(space.has_wall(Heading::East));
        assert!(!space.has_wall(Heading::South));
    }

    #[test]
    fn test_actions_keep_order() {
        let mut space = Space::new(Position::new(0, 0));
        space.add_action(FieldAction::checkpoint(1));
        space.add_action(FieldAction::conveyor(Heading::West));

        assert_eq!(
            space.actions(),
            &[FieldAction::checkpoint(1), FieldAction::conveyor(Heading::West)]
        );
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 4).to_string(), "(3, 4)");
    }
}
