//! Game state: board, players, occupancy and turn bookkeeping.
//!
//! `GameState` is the single owner of everything that changes during a
//! game. The board is immutable; which player stands where is tracked in an
//! occupancy index kept in sync with each player's position, so a space
//! can never hold two players.

use im::Vector;
use rustc_hash::FxHashMap;

use super::config::GameConfig;
use super::event::{GameEvent, MAX_PENDING_EVENTS};
use super::player::{Player, PlayerId};
use crate::board::{Board, Position};
use crate::error::{GameError, GameResult};
use crate::rules::Phase;

/// Complete mutable game state.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    players: Vec<Player>,
    /// Position -> occupant. Mirrors `Player::position`.
    occupancy: FxHashMap<Position, PlayerId>,

    phase: Phase,
    /// Register being executed; meaningful during activation.
    step: usize,
    current: Option<PlayerId>,
    step_mode: bool,
    move_count: u32,
    game_id: Option<u32>,
    winner: Option<PlayerId>,

    events: Vector<GameEvent>,
}

impl GameState {
    /// Create a state with no players in the initialisation phase.
    #[must_use]
    pub fn new(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            players: Vec::new(),
            occupancy: FxHashMap::default(),
            phase: Phase::Initialisation,
            step: 0,
            current: None,
            step_mode: false,
            move_count: 0,
            game_id: None,
            winner: None,
            events: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Players ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Mutable access for cosmetic and card changes. Positions can only be
    /// changed through the state itself.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Add an unplaced player and return its id.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        assert!(self.players.len() < 255, "At most 255 players supported");
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(player);
        id
    }

    // === Occupancy ===

    /// The player standing on `position`, if any.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<PlayerId> {
        self.occupancy.get(&position).copied()
    }

    #[must_use]
    pub fn is_free(&self, position: Position) -> bool {
        !self.occupancy.contains_key(&position)
    }

    /// Put a player on a free space of the board.
    pub fn place_player(&mut self, id: PlayerId, position: Position) -> GameResult<()> {
        if self.player(id).is_none() {
            return Err(GameError::UnknownPlayer(id));
        }
        if !self.board.contains(position) {
            return Err(GameError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        match self.occupant(position) {
            Some(other) if other != id => Err(GameError::SpaceOccupied {
                x: position.x,
                y: position.y,
            }),
            Some(_) => Ok(()),
            None => {
                self.relocate(id, position);
                Ok(())
            }
        }
    }

    /// Take a player off the board.
    pub fn remove_from_board(&mut self, id: PlayerId) {
        let Some(player) = self.players.get_mut(id.index()) else {
            return;
        };
        if let Some(old) = player.position() {
            player.set_position(None);
            if self.occupancy.get(&old) == Some(&id) {
                self.occupancy.remove(&old);
            }
        }
    }

    /// Move a player onto `to`, vacating its old space.
    ///
    /// Callers guarantee `to` is free or is being vacated by this move.
    pub(crate) fn relocate(&mut self, id: PlayerId, to: Position) {
        let player = &mut self.players[id.index()];
        let from = player.position();
        if from == Some(to) {
            return;
        }
        player.set_position(Some(to));

        if let Some(old) = from {
            if self.occupancy.get(&old) == Some(&id) {
                self.occupancy.remove(&old);
            }
        }
        debug_assert!(self.is_free(to), "relocating onto an occupied space");
        self.occupancy.insert(to, id);
        self.push_event(GameEvent::PlayerMoved { player: id, from, to });
    }

    // === Turn bookkeeping ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            log::info!("phase {:?} -> {:?}", self.phase, phase);
            self.push_event(GameEvent::PhaseChanged { from: self.phase, to: phase });
            self.phase = phase;
        }
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: usize) {
        if step != self.step {
            self.step = step;
            self.push_event(GameEvent::StepChanged(step));
        }
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|id| self.player(id))
    }

    pub(crate) fn set_current_player(&mut self, id: Option<PlayerId>) {
        let id = id.filter(|id| id.index() < self.players.len());
        if id != self.current {
            self.current = id;
            self.push_event(GameEvent::CurrentPlayerChanged(id));
        }
    }

    #[must_use]
    pub fn is_step_mode(&self) -> bool {
        self.step_mode
    }

    pub(crate) fn set_step_mode(&mut self, step_mode: bool) {
        self.step_mode = step_mode;
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
        log::debug!("move count updated: {}", self.move_count);
        self.push_event(GameEvent::MoveCountChanged(self.move_count));
    }

    #[must_use]
    pub fn game_id(&self) -> Option<u32> {
        self.game_id
    }

    /// Assign the game id. An id, once set, cannot change.
    pub fn set_game_id(&mut self, game_id: u32) -> GameResult<()> {
        match self.game_id {
            None => {
                self.game_id = Some(game_id);
                Ok(())
            }
            Some(existing) if existing == game_id => Ok(()),
            Some(existing) => Err(GameError::GameIdAlreadySet(existing)),
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub(crate) fn set_winner(&mut self, id: PlayerId) {
        self.winner = Some(id);
        self.push_event(GameEvent::GameWon(id));
    }

    /// One-line summary of the current player and progress.
    #[must_use]
    pub fn status_message(&self) -> String {
        match self.current_player() {
            Some(player) => format!(
                "Player = {}, Move Count = {}, Checkpoint = {}",
                player.name(),
                self.move_count,
                player.checkpoint_progress()
            ),
            None => format!("Player = <none>, Move Count = {}", self.move_count),
        }
    }

    // === Events ===

    /// Record an event, discarding the oldest once `MAX_PENDING_EVENTS`
    /// are pending.
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Take all pending events. Presentation layers should call this after
    /// every controller call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }

    // === Restore ===

    /// Rebuild a state from its parts, validating positions.
    pub(crate) fn from_parts(parts: StateParts) -> GameResult<Self> {
        let StateParts {
            config,
            board,
            players,
            phase,
            step,
            current,
            step_mode,
            move_count,
            game_id,
            winner,
        } = parts;

        let mut occupancy = FxHashMap::default();
        for (idx, player) in players.iter().enumerate() {
            if player.program().len() != config.registers || player.hand().len() != config.hand_size {
                return Err(GameError::InvalidSnapshot(format!(
                    "{} has the wrong number of card slots",
                    player.name()
                )));
            }
            if let Some(pos) = player.position() {
                if !board.contains(pos) {
                    return Err(GameError::OutOfBounds { x: pos.x, y: pos.y });
                }
                if occupancy.insert(pos, PlayerId::new(idx as u8)).is_some() {
                    return Err(GameError::SpaceOccupied { x: pos.x, y: pos.y });
                }
            }
        }
        if step >= config.registers {
            return Err(GameError::InvalidSnapshot(format!("step {step} out of range")));
        }
        if current.is_some_and(|id| id.index() >= players.len()) {
            return Err(GameError::InvalidSnapshot("current player does not exist".to_string()));
        }
        let activating = matches!(phase, Phase::Activation | Phase::PlayerInteraction);
        if activating && current.is_none() && !players.is_empty() {
            return Err(GameError::InvalidSnapshot(format!(
                "phase {phase:?} requires a current player"
            )));
        }
        if winner.is_some_and(|id| id.index() >= players.len()) {
            return Err(GameError::InvalidSnapshot("winner does not exist".to_string()));
        }
        if winner.is_some() != phase.is_finished() {
            return Err(GameError::InvalidSnapshot(format!(
                "winner {winner:?} does not match phase {phase:?}"
            )));
        }

        Ok(Self {
            config,
            board,
            players,
            occupancy,
            phase,
            step,
            current,
            step_mode,
            move_count,
            game_id,
            winner,
            events: Vector::new(),
        })
    }
}

/// Plain fields needed to rebuild a `GameState`.
pub(crate) struct StateParts {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<Player>,
    pub phase: Phase,
    pub step: usize,
    pub current: Option<PlayerId>,
    pub step_mode: bool,
    pub move_count: u32,
    pub game_id: Option<u32>,
    pub winner: Option<PlayerId>,
}
