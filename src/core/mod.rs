//! Core engine types: headings, players, configuration, RNG, events, state.
//!
//! Everything the rules mutate lives in `GameState`; everything else here
//! is a plain value type.

pub mod config;
pub mod event;
pub mod heading;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::{
    GameConfig, DEFAULT_CHECKPOINT_COUNT, DEFAULT_HAND_SIZE, DEFAULT_REGISTERS, FIRST_CHECKPOINT,
};
pub use event::{GameEvent, MAX_PENDING_EVENTS};
pub use heading::Heading;
pub use player::{CardSlot, Player, PlayerId, SlotArea};
pub use rng::{GameRng, GameRngState};
pub use snapshot::GameSnapshot;
pub use state::GameState;
