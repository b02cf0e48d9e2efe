//! Named board layouts.

use super::builder::BoardBuilder;
use super::grid::Board;
use super::space::Position;
use crate::core::heading::Heading;
use crate::error::GameResult;

pub const BOARD_1: &str = "Board1";
pub const BOARD_2: &str = "Board2";

/// Conveyors placed on every preset board, skipped where they fall off
/// the board.
const CONVEYORS: [(usize, usize, Heading); 5] = [
    (2, 3, Heading::East),
    (4, 5, Heading::North),
    (6, 2, Heading::West),
    (1, 7, Heading::South),
    (8, 4, Heading::East),
];

/// Names accepted by [`create_board`].
#[must_use]
pub fn available_board_names() -> &'static [&'static str] {
    &[BOARD_1, BOARD_2]
}

/// Build a named board.
///
/// Unknown names produce an 8x8 board with the `Board1` layout.
pub fn create_board(name: &str) -> GameResult<Board> {
    let builder = match name {
        BOARD_1 => board_1(BoardBuilder::new(14, 8).named(BOARD_1)),
        BOARD_2 => board_2(BoardBuilder::new(14, 8).named(BOARD_2)),
        _ => board_1(BoardBuilder::new(8, 8).named("<none>")),
    };
    with_conveyors(builder).build()
}

fn board_1(builder: BoardBuilder) -> BoardBuilder {
    builder
        .wall(Position::new(0, 0), Heading::South)
        .wall(Position::new(1, 0), Heading::North)
        .wall(Position::new(1, 1), Heading::West)
        .checkpoint(Position::new(4, 0), 0)
        .checkpoint(Position::new(6, 6), 1)
        .checkpoint(Position::new(2, 6), 2)
}

fn board_2(builder: BoardBuilder) -> BoardBuilder {
    builder
        .wall(Position::new(4, 4), Heading::East)
        .wall(Position::new(6, 6), Heading::West)
        .checkpoint(Position::new(1, 1), 0)
        .checkpoint(Position::new(5, 4), 1)
        .checkpoint(Position::new(7, 3), 2)
}

fn with_conveyors(builder: BoardBuilder) -> BoardBuilder {
    CONVEYORS.iter().fold(builder, |builder, &(x, y, heading)| {
        let position = Position::new(x, y);
        if builder.contains(position) {
            builder.conveyor(position, heading)
        } else {
            log::warn!("skipping conveyor at {position}: outside the board");
            builder
        }
    })
}
