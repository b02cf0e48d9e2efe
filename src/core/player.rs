//! Players and player identification.
//!
//! ## PlayerId
//!
//! Type-safe player index. Players act in ascending id order within every
//! register step.
//!
//! ## Player
//!
//! Per-player mutable state: heading, position, checkpoint progress and the
//! two card-slot arrays (program registers and hand).

use serde::{Deserialize, Serialize};

use super::config::FIRST_CHECKPOINT;
use super::heading::Heading;
use crate::board::Position;
use crate::cards::CommandCardField;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use robo_rally::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Which card-slot array of a player a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotArea {
    Program,
    Hand,
}

/// Address of a single card slot, used for card transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    pub player: PlayerId,
    pub area: SlotArea,
    pub index: usize,
}

impl CardSlot {
    #[must_use]
    pub const fn program(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            area: SlotArea::Program,
            index,
        }
    }

    #[must_use]
    pub const fn hand(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            area: SlotArea::Hand,
            index,
        }
    }
}

/// A robot and its programming cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: String,
    heading: Heading,
    position: Option<Position>,
    checkpoint_progress: u32,
    program: Vec<CommandCardField>,
    hand: Vec<CommandCardField>,
}

impl Player {
    /// Create an unplaced player facing south with empty slots.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, registers: usize, hand_size: usize) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            heading: Heading::South,
            position: None,
            checkpoint_progress: FIRST_CHECKPOINT,
            program: vec![CommandCardField::new(); registers],
            hand: vec![CommandCardField::new(); hand_size],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Current space, or `None` before the player is placed.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Only the game state may move players, so occupancy stays consistent.
    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    #[must_use]
    pub fn checkpoint_progress(&self) -> u32 {
        self.checkpoint_progress
    }

    pub(crate) fn set_checkpoint_progress(&mut self, progress: u32) {
        self.checkpoint_progress = progress;
    }

    /// Program registers in execution order.
    #[must_use]
    pub fn program(&self) -> &[CommandCardField] {
        &self.program
    }

    #[must_use]
    pub fn program_field(&self, register: usize) -> Option<&CommandCardField> {
        self.program.get(register)
    }

    pub fn program_mut(&mut self) -> &mut [CommandCardField] {
        &mut self.program
    }

    #[must_use]
    pub fn hand(&self) -> &[CommandCardField] {
        &self.hand
    }

    #[must_use]
    pub fn card_field(&self, slot: usize) -> Option<&CommandCardField> {
        self.hand.get(slot)
    }

    pub fn hand_mut(&mut self) -> &mut [CommandCardField] {
        &mut self.hand
    }

    pub(crate) fn slot(&self, area: SlotArea, index: usize) -> Option<&CommandCardField> {
        match area {
            SlotArea::Program => self.program.get(index),
            SlotArea::Hand => self.hand.get(index),
        }
    }

    pub(crate) fn slot_mut(&mut self, area: SlotArea, index: usize) -> Option<&mut CommandCardField> {
        match area {
            SlotArea::Program => self.program.get_mut(index),
            SlotArea::Hand => self.hand.get_mut(index),
        }
    }
}
