//! Movement resolution with push chains.
//!
//! Moving into an occupied space pushes the occupant one space further in
//! the same direction, recursively. Resolution runs in two passes:
//!
//! 1. **Trace**: walk from the mover along the direction, collecting each
//!    player and its destination until a free space is found. A wall or a
//!    chain that loops back to the mover blocks the whole chain.
//! 2. **Apply**: only when the trace succeeded, move the chain from the far
//!    end back to the mover.
//!
//! A blocked chain therefore never moves anyone.

use smallvec::SmallVec;

use crate::board::Position;
use crate::core::heading::Heading;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Players to move, nearest (the mover) first, with their destinations.
pub type PushChain = SmallVec<[(PlayerId, Position); 4]>;

/// Resolves moves on a `GameState`.
pub struct MovementResolver;

impl MovementResolver {
    /// Trace the push chain for `mover` stepping towards `heading`.
    ///
    /// Returns `None` if the move is blocked or the mover is not on the
    /// board. Does not modify the state.
    #[must_use]
    pub fn trace(state: &GameState, mover: PlayerId, heading: Heading) -> Option<PushChain> {
        let start = state.player(mover)?.position()?;
        let board = state.board();

        let mut chain = PushChain::new();
        let mut pusher = mover;
        let mut from = start;
        loop {
            let Some(target) = board.neighbour(from, heading) else {
                log::trace!("push chain from {start} blocked by wall at {from} ({heading})");
                return None;
            };
            chain.push((pusher, target));

            match state.occupant(target) {
                None => return Some(chain),
                // Every space in this line is occupied; nobody can move.
                Some(next) if next == mover => return None,
                Some(next) => {
                    pusher = next;
                    from = target;
                }
            }
        }
    }

    /// Apply a traced chain, far end first.
    pub fn apply(state: &mut GameState, chain: &PushChain) {
        for &(player, target) in chain.iter().rev() {
            state.relocate(player, target);
        }
    }

    /// Move `mover` one space towards `heading`, pushing any players in the
    /// way. Returns whether the move happened.
    pub fn try_move(state: &mut GameState, mover: PlayerId, heading: Heading) -> bool {
        match Self::trace(state, mover, heading) {
            Some(chain) => {
                if chain.len() > 1 {
                    log::trace!("{mover} pushes {} player(s) {heading}", chain.len() - 1);
                }
                Self::apply(state, &chain);
                true
            }
            None => false,
        }
    }
}
