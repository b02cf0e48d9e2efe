//! Error types for board setup and controller calls.
//!
//! Ordinary gameplay outcomes (a blocked move, a rejected card transfer)
//! are reported as `bool` and never appear here.

use thiserror::Error;

use crate::core::player::PlayerId;
use crate::rules::Phase;

#[derive(Debug, Error)]
pub enum GameError {
    /// A coordinate lies outside the board.
    #[error("position ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },

    /// Another player already stands on the target space.
    #[error("space ({x}, {y}) is already occupied")]
    SpaceOccupied { x: usize, y: usize },

    /// The player id does not belong to this game.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// A player choice was supplied while no choice was pending.
    #[error("no player choice is pending in phase {phase:?}")]
    NotAwaitingChoice { phase: Phase },

    /// The game has already been won.
    #[error("the game is finished")]
    GameFinished,

    /// The game id was already assigned a different value.
    #[error("game id is already set to {0}")]
    GameIdAlreadySet(u32),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A snapshot does not describe a consistent game.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type GameResult<T> = Result<T, GameError>;
