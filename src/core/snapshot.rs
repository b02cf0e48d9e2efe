//! Serializable game snapshots.
//!
//! A `GameSnapshot` captures everything needed to rebuild an identical
//! controller: configuration, board layout, players and turn bookkeeping,
//! plus the RNG position of the card source when it has one. Pending events
//! are not part of a snapshot.
//!
//! Snapshots derive serde, so any serde format works; `to_bytes` and
//! `from_bytes` use bincode.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, PlayerId};
use super::rng::GameRngState;
use super::state::{GameState, StateParts};
use crate::board::Board;
use crate::error::GameResult;
use crate::rules::Phase;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<Player>,
    pub phase: Phase,
    pub step: usize,
    pub current_player: Option<PlayerId>,
    pub step_mode: bool,
    pub move_count: u32,
    pub game_id: Option<u32>,
    pub winner: Option<PlayerId>,
    /// RNG position of the card source, if it is RNG-backed.
    pub card_rng: Option<GameRngState>,
}

impl GameSnapshot {
    pub(crate) fn capture(state: &GameState, card_rng: Option<GameRngState>) -> Self {
        Self {
            config: state.config().clone(),
            board: state.board().clone(),
            players: state.players().to_vec(),
            phase: state.phase(),
            step: state.step(),
            current_player: state.current_player_id(),
            step_mode: state.is_step_mode(),
            move_count: state.move_count(),
            game_id: state.game_id(),
            winner: state.winner(),
            card_rng,
        }
    }

    pub(crate) fn into_state(self) -> GameResult<GameState> {
        GameState::from_parts(StateParts {
            config: self.config,
            board: self.board,
            players: self.players,
            phase: self.phase,
            step: self.step,
            current: self.current_player,
            step_mode: self.step_mode,
            move_count: self.move_count,
            game_id: self.game_id,
            winner: self.winner,
        })
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> GameResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> GameResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
