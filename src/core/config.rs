//! Game configuration.
//!
//! Games configure the engine at startup with a `GameConfig`:
//! - number of program registers per player
//! - number of hand slots dealt each programming phase
//! - number of checkpoints a player must reach to win
//! - seed for the default card source
//!
//! The board layout is configured separately through `BoardBuilder`.

use serde::{Deserialize, Serialize};

/// Program registers per player.
pub const DEFAULT_REGISTERS: usize = 5;

/// Command cards dealt to each player per programming phase.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Checkpoints needed to win.
pub const DEFAULT_CHECKPOINT_COUNT: u32 = 3;

/// Checkpoint progress every player starts with; also the number of the
/// first checkpoint on a board.
pub const FIRST_CHECKPOINT: u32 = 0;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Program registers per player (N).
    pub registers: usize,

    /// Hand slots per player (M).
    pub hand_size: usize,

    /// Progress value at which a player wins.
    pub checkpoint_count: u32,

    /// Seed for the default random card source.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            registers: DEFAULT_REGISTERS,
            hand_size: DEFAULT_HAND_SIZE,
            checkpoint_count: DEFAULT_CHECKPOINT_COUNT,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard rule constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of program registers.
    #[must_use]
    pub fn with_registers(mut self, registers: usize) -> Self {
        assert!(registers > 0, "Must have at least 1 register");
        self.registers = registers;
        self
    }

    /// Set the number of hand slots.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Must have at least 1 hand slot");
        self.hand_size = hand_size;
        self
    }

    /// Set the number of checkpoints needed to win.
    #[must_use]
    pub fn with_checkpoint_count(mut self, count: u32) -> Self {
        assert!(count > FIRST_CHECKPOINT, "Must have at least 1 checkpoint");
        self.checkpoint_count = count;
        self
    }

    /// Set the card dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
