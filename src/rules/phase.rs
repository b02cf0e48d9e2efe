//! Game phases.

use serde::{Deserialize, Serialize};

/// Phases of a game, in normal order of progression.
///
/// Activation may pause in `PlayerInteraction` and resume; `Finished` is
/// terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Initialisation,
    Programming,
    Activation,
    PlayerInteraction,
    Finished,
}

impl Phase {
    #[must_use]
    pub fn is_finished(self) -> bool {
        self == Phase::Finished
    }
}

/// A player's answer to an interactive command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnChoice {
    Left,
    Right,
}

impl From<TurnChoice> for crate::cards::Command {
    fn from(choice: TurnChoice) -> Self {
        match choice {
            TurnChoice::Left => crate::cards::Command::Left,
            TurnChoice::Right => crate::cards::Command::Right,
        }
    }
}
