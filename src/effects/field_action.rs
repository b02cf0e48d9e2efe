//! Field actions attached to board spaces.
//!
//! Field actions fire once per register step, after every player has
//! executed that register. They are a closed set of variants dispatched by
//! a single `do_action` match.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::event::GameEvent;
use crate::core::heading::Heading;
use crate::core::state::GameState;

/// Behaviour bound to a board space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldAction {
    /// Carries the occupant one space towards `heading` if that space is
    /// free. Conveyors never push.
    ConveyorBelt { heading: Heading },

    /// Advances an occupant whose progress equals `number`.
    CheckPoint { number: u32 },
}

impl FieldAction {
    #[must_use]
    pub const fn conveyor(heading: Heading) -> Self {
        Self::ConveyorBelt { heading }
    }

    #[must_use]
    pub const fn checkpoint(number: u32) -> Self {
        Self::CheckPoint { number }
    }

    /// Apply this action to whoever occupies `position`.
    ///
    /// Returns true if the occupant has now reached the configured
    /// checkpoint count, i.e. the game is won.
    pub fn do_action(&self, state: &mut GameState, position: Position) -> bool {
        let Some(player) = state.occupant(position) else {
            return false;
        };

        match *self {
            FieldAction::ConveyorBelt { heading } => {
                let target = state.board().neighbour(position, heading);
                match target {
                    Some(target) if state.is_free(target) => {
                        log::debug!("{player} moved by conveyor belt {position} -> {target}");
                        state.relocate(player, target);
                    }
                    _ => log::debug!("conveyor belt blocked at {position}"),
                }
                false
            }

            FieldAction::CheckPoint { number } => {
                let threshold = state.config().checkpoint_count;
                let Some(occupant) = state.player_mut(player) else {
                    return false;
                };
                if occupant.checkpoint_progress() != number {
                    return false;
                }

                let progress = number + 1;
                occupant.set_checkpoint_progress(progress);
                log::info!("{player} reached checkpoint {number}");
                state.push_event(GameEvent::CheckpointReached { player, number });
                progress >= threshold
            }
        }
    }
}
