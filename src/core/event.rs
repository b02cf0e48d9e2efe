//! State-change events.
//!
//! The controller records a `GameEvent` for every observable change. A
//! presentation layer drains the queue after each call instead of
//! registering observers on the model.

use serde::{Deserialize, Serialize};

use super::heading::Heading;
use super::player::{CardSlot, PlayerId};
use crate::board::Position;
use crate::cards::Command;
use crate::rules::Phase;

/// Pending events kept before the oldest are discarded. Callers that never
/// drain the queue lose history but not memory.
pub const MAX_PENDING_EVENTS: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: Phase, to: Phase },
    StepChanged(usize),
    CurrentPlayerChanged(Option<PlayerId>),
    /// `from` is `None` when a player is first placed.
    PlayerMoved {
        player: PlayerId,
        from: Option<Position>,
        to: Position,
    },
    PlayerTurned { player: PlayerId, heading: Heading },
    MoveCountChanged(u32),
    /// A program register became visible for every player.
    RegisterRevealed(usize),
    CardsDealt(PlayerId),
    CardMoved { from: CardSlot, to: CardSlot },
    /// Activation paused until the player picks one of `options`.
    ChoiceRequired {
        player: PlayerId,
        options: Vec<Command>,
    },
    CheckpointReached { player: PlayerId, number: u32 },
    GameWon(PlayerId),
}
