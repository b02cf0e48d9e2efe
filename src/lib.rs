//! # robo-rally
//!
//! A turn-based programming board game engine.
//!
//! Players place robots on a toroidal grid, program a fixed number of
//! registers with command cards, then watch the programs execute register
//! by register. Robots push each other, ride conveyor belts and race
//! through numbered checkpoints; the first to reach the last one wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Card dealing comes from a seedable `CardSource`;
//!    everything else is a pure function of the inputs.
//!
//! 2. **Single owner**: `GameController` owns all mutable state. The board
//!    is immutable once built; occupancy lives in `GameState`.
//!
//! 3. **No observers**: State changes are recorded as `GameEvent`s and
//!    drained by whoever presents the game.
//!
//! ## Modules
//!
//! - `core`: Headings, players, configuration, RNG, events, state, snapshots
//! - `cards`: Commands, cards, card slots and card sources
//! - `board`: Positions, spaces, the grid and named layouts
//! - `effects`: Field actions (conveyor belts, checkpoints)
//! - `rules`: Phases, push-chain movement and the game controller

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardSlot, GameConfig, GameEvent, GameRng, GameRngState, GameSnapshot, GameState, Heading,
    Player, PlayerId, SlotArea,
};

pub use crate::board::{Board, BoardBuilder, Position, Space};

pub use crate::cards::{
    CardSource, Command, CommandCard, CommandCardField, CycleCardSource, RandomCardSource,
};

pub use crate::effects::FieldAction;

pub use crate::error::{GameError, GameResult};

pub use crate::rules::{GameController, MovementResolver, Phase, TurnChoice};
