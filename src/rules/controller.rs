//! The game controller: phase state machine and command execution.
//!
//! ## Round structure
//!
//! 1. `start_programming_phase` clears every program and deals a new hand.
//! 2. Players move cards from hand to program with `move_card`.
//! 3. `finish_programming_phase` enters activation at register 0.
//! 4. `step_once` / `run_programs` execute registers round-robin: for each
//!    register every player acts in id order, then field actions fire for
//!    every player. After the last register a new programming phase starts.
//!
//! An interactive card pauses activation in `PlayerInteraction` until
//! `resolve_player_choice` is called. A checkpoint win ends the game in
//! `Finished`, after which nothing changes any more.
//!
//! ```
//! use robo_rally::board::{BoardBuilder, Position};
//! use robo_rally::cards::{Command, CycleCardSource};
//! use robo_rally::core::{CardSlot, GameConfig};
//! use robo_rally::rules::{GameController, Phase};
//!
//! let board = BoardBuilder::new(8, 8).build().unwrap();
//! let source = CycleCardSource::new(vec![Command::Forward]);
//! let mut game = GameController::with_card_source(GameConfig::new(), board, Box::new(source));
//! let ada = game.add_player("Ada", "red");
//! game.place_player(ada, Position::new(0, 0)).unwrap();
//!
//! game.start_programming_phase().unwrap();
//! assert!(game.move_card(CardSlot::hand(ada, 0), CardSlot::program(ada, 0)));
//! game.finish_programming_phase().unwrap();
//! game.run_programs();
//!
//! assert_eq!(game.state().phase(), Phase::Programming);
//! assert_eq!(game.state().player(ada).unwrap().position(), Some(Position::new(0, 1)));
//! ```

use super::movement::MovementResolver;
use super::phase::{Phase, TurnChoice};
use crate::board::{Board, Position};
use crate::cards::{CardSource, Command, RandomCardSource};
use crate::core::config::GameConfig;
use crate::core::event::GameEvent;
use crate::core::heading::Heading;
use crate::core::player::{CardSlot, Player, PlayerId};
use crate::core::snapshot::GameSnapshot;
use crate::core::state::GameState;
use crate::error::{GameError, GameResult};

/// Drives a game: owns the state and the card source.
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    cards: Box<dyn CardSource>,
}

impl GameController {
    /// Create a controller dealing from a `RandomCardSource` seeded with
    /// `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig, board: Board) -> Self {
        let cards = Box::new(RandomCardSource::new(config.seed));
        Self::with_card_source(config, board, cards)
    }

    #[must_use]
    pub fn with_card_source(config: GameConfig, board: Board, cards: Box<dyn CardSource>) -> Self {
        log::info!(
            "new game on {:?} ({}x{})",
            board.name(),
            board.width(),
            board.height()
        );
        warn_on_checkpoint_mismatch(&config, &board);
        Self {
            state: GameState::new(config, board),
            cards,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    /// Convenience for `state().status_message()`.
    #[must_use]
    pub fn status_message(&self) -> String {
        self.state.status_message()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn set_game_id(&mut self, game_id: u32) -> GameResult<()> {
        self.state.set_game_id(game_id)
    }

    // === Setup ===

    /// Add a player with slots sized by the configuration.
    pub fn add_player(&mut self, name: impl Into<String>, color: impl Into<String>) -> PlayerId {
        let config = self.state.config();
        let player = Player::new(name, color, config.registers, config.hand_size);
        let id = self.state.add_player(player);
        if self.state.current_player_id().is_none() {
            self.state.set_current_player(Some(id));
        }
        id
    }

    pub fn place_player(&mut self, id: PlayerId, position: Position) -> GameResult<()> {
        self.ensure_not_finished()?;
        self.state.place_player(id, position)
    }

    pub fn set_player_heading(&mut self, id: PlayerId, heading: Heading) -> GameResult<()> {
        self.ensure_not_finished()?;
        let player = self.state.player_mut(id).ok_or(GameError::UnknownPlayer(id))?;
        player.set_heading(heading);
        self.state.push_event(GameEvent::PlayerTurned { player: id, heading });
        Ok(())
    }

    /// Make `id` the current player. Setup calls fail once the game is won.
    pub fn set_current_player(&mut self, id: PlayerId) -> GameResult<()> {
        self.ensure_not_finished()?;
        if self.state.player(id).is_none() {
            return Err(GameError::UnknownPlayer(id));
        }
        self.state.set_current_player(Some(id));
        Ok(())
    }

    /// Put the current player on a free space and pass the turn to the
    /// next player. Returns false if the space is occupied or off the board.
    pub fn move_current_player_to_space(&mut self, position: Position) -> bool {
        if self.state.phase().is_finished() || !self.state.board().contains(position) {
            return false;
        }
        let Some(current) = self.state.current_player_id() else {
            return false;
        };
        if !self.state.is_free(position) {
            return false;
        }

        self.state.relocate(current, position);
        let next = (current.index() + 1) % self.state.player_count();
        self.state.set_current_player(Some(PlayerId::new(next as u8)));
        true
    }

    // === Programming ===

    /// Clear all programs and deal a fresh hand to every player.
    pub fn start_programming_phase(&mut self) -> GameResult<()> {
        self.ensure_not_finished()?;
        self.state.set_phase(Phase::Programming);
        self.state.set_current_player(self.first_player());
        self.state.set_step(0);

        for id in self.state.player_ids().collect::<Vec<_>>() {
            let Some(player) = self.state.player_mut(id) else {
                continue;
            };
            for field in player.program_mut() {
                field.set_card(None);
                field.set_visible(true);
            }
            for field in player.hand_mut() {
                field.set_card(Some(self.cards.draw_card()));
                field.set_visible(true);
            }
            self.state.push_event(GameEvent::CardsDealt(id));
        }
        log::info!("dealt cards to {} player(s)", self.state.player_count());
        Ok(())
    }

    /// Hide all programs except register 0 and enter activation.
    pub fn finish_programming_phase(&mut self) -> GameResult<()> {
        self.ensure_not_finished()?;
        self.make_program_fields_invisible();
        self.make_program_fields_visible(0);
        self.state.set_phase(Phase::Activation);
        self.state.set_current_player(self.first_player());
        self.state.set_step(0);
        Ok(())
    }

    /// Move a card from `source` to an empty `destination`.
    ///
    /// Fails without changes if the source is empty, the destination is
    /// occupied, either slot does not exist, or the game is over.
    pub fn move_card(&mut self, source: CardSlot, destination: CardSlot) -> bool {
        if self.state.phase().is_finished() || source == destination {
            return false;
        }
        let source_card = self
            .state
            .player(source.player)
            .and_then(|p| p.slot(source.area, source.index))
            .and_then(|f| f.card());
        let destination_free = self
            .state
            .player(destination.player)
            .and_then(|p| p.slot(destination.area, destination.index))
            .is_some_and(|f| f.is_empty());

        let Some(card) = source_card else {
            return false;
        };
        if !destination_free {
            return false;
        }

        if let Some(field) = self
            .state
            .player_mut(source.player)
            .and_then(|p| p.slot_mut(source.area, source.index))
        {
            field.set_card(None);
        }
        if let Some(field) = self
            .state
            .player_mut(destination.player)
            .and_then(|p| p.slot_mut(destination.area, destination.index))
        {
            field.set_card(Some(card));
        }
        self.state.push_event(GameEvent::CardMoved {
            from: source,
            to: destination,
        });
        true
    }

    // === Activation ===

    /// Execute programs until activation pauses or the round ends.
    pub fn run_programs(&mut self) {
        self.execute_programs(false);
    }

    /// Execute a single player's register and stop.
    pub fn step_once(&mut self) {
        self.execute_programs(true);
    }

    fn execute_programs(&mut self, step_mode: bool) {
        if self.state.phase().is_finished() {
            return;
        }
        self.state.set_step_mode(step_mode);
        self.continue_programs();
    }

    /// Answer the pending interactive card of the current player, then
    /// resume activation.
    pub fn resolve_player_choice(&mut self, choice: TurnChoice) -> GameResult<()> {
        let phase = self.state.phase();
        if phase != Phase::PlayerInteraction {
            return Err(GameError::NotAwaitingChoice { phase });
        }
        let current = self.current_for_activation();

        log::debug!("{current} chose {choice:?}");
        self.execute_command(current, Command::from(choice));
        self.state.set_phase(Phase::Activation);
        self.advance_player();

        if !self.state.is_step_mode() {
            self.continue_programs();
        }
        Ok(())
    }

    fn continue_programs(&mut self) {
        if self.state.phase() != Phase::Activation {
            log::debug!("ignoring activation request in phase {:?}", self.state.phase());
            return;
        }
        loop {
            self.execute_next_step();
            if self.state.phase() != Phase::Activation || self.state.is_step_mode() {
                break;
            }
        }
    }

    fn execute_next_step(&mut self) {
        let current = self.current_for_activation();
        let step = self.state.step();
        assert!(
            step < self.config().registers,
            "register step {step} out of range"
        );

        let card = self
            .state
            .player(current)
            .and_then(|p| p.program_field(step))
            .and_then(|f| f.card());

        if let Some(card) = card {
            if card.command.is_interactive() {
                log::debug!("{current} must choose for {}", card.command);
                self.state.set_phase(Phase::PlayerInteraction);
                self.state.push_event(GameEvent::ChoiceRequired {
                    player: current,
                    options: card.command.options().to_vec(),
                });
                return;
            }
            self.execute_command(current, card.command);
        }
        self.advance_player();
    }

    /// Pass activation to the next player, or finish the register.
    fn advance_player(&mut self) {
        let current = self.current_for_activation();
        let next = current.index() + 1;
        if next < self.state.player_count() {
            self.state.set_current_player(Some(PlayerId::new(next as u8)));
            return;
        }

        if self.activate_field_actions() {
            return;
        }

        let step = self.state.step() + 1;
        if step < self.config().registers {
            self.make_program_fields_visible(step);
            self.state.set_step(step);
            self.state.set_current_player(self.first_player());
        } else if let Err(err) = self.start_programming_phase() {
            log::warn!("could not start programming phase: {err}");
        }
    }

    /// Fire the field actions under every player. Returns true if the game
    /// was won.
    fn activate_field_actions(&mut self) -> bool {
        for id in self.state.player_ids().collect::<Vec<_>>() {
            let Some(position) = self.state.player(id).and_then(Player::position) else {
                continue;
            };
            let actions = match self.state.board().space_at(position) {
                Some(space) => space.actions().to_vec(),
                None => continue,
            };

            for action in actions {
                if action.do_action(&mut self.state, position) {
                    log::info!("{id} has won the game");
                    self.state.set_winner(id);
                    self.state.set_phase(Phase::Finished);
                    return true;
                }
            }
        }
        false
    }

    fn current_for_activation(&self) -> PlayerId {
        match self.state.current_player_id() {
            Some(id) => id,
            None => panic!("activation step without a current player"),
        }
    }

    fn first_player(&self) -> Option<PlayerId> {
        (self.state.player_count() > 0).then_some(PlayerId::new(0))
    }

    fn ensure_not_finished(&self) -> GameResult<()> {
        if self.state.phase().is_finished() {
            Err(GameError::GameFinished)
        } else {
            Ok(())
        }
    }

    fn make_program_fields_visible(&mut self, register: usize) {
        for id in self.state.player_ids().collect::<Vec<_>>() {
            if let Some(field) = self
                .state
                .player_mut(id)
                .and_then(|p| p.program_mut().get_mut(register))
            {
                field.set_visible(true);
            }
        }
        self.state.push_event(GameEvent::RegisterRevealed(register));
    }

    fn make_program_fields_invisible(&mut self) {
        for id in self.state.player_ids().collect::<Vec<_>>() {
            if let Some(player) = self.state.player_mut(id) {
                for field in player.program_mut() {
                    field.set_visible(false);
                }
            }
        }
    }

    // === Commands ===

    fn execute_command(&mut self, player: PlayerId, command: Command) {
        log::debug!("{player} executes {command}");
        match command {
            Command::Forward => {
                self.move_forward(player);
            }
            Command::Right => self.turn_right(player),
            Command::Left => self.turn_left(player),
            Command::FastForward => self.fast_forward(player),
            Command::UTurn => self.u_turn(player),
            Command::Backward => {
                self.move_backward(player);
            }
            Command::LeftOrRight => {
                log::debug!("interactive command dispatched without a choice");
            }
        }
    }

    /// Move one space along the player's heading, pushing others.
    pub fn move_forward(&mut self, player: PlayerId) -> bool {
        let Some(heading) = self.state.player(player).map(Player::heading) else {
            return false;
        };
        self.counted_move(player, heading)
    }

    /// Two independent forward moves.
    pub fn fast_forward(&mut self, player: PlayerId) {
        self.move_forward(player);
        self.move_forward(player);
    }

    /// Move one space against the player's heading without turning.
    pub fn move_backward(&mut self, player: PlayerId) -> bool {
        let Some(heading) = self.state.player(player).map(Player::heading) else {
            return false;
        };
        self.counted_move(player, heading.opposite())
    }

    pub fn turn_right(&mut self, player: PlayerId) {
        self.rotate(player, 1);
    }

    pub fn turn_left(&mut self, player: PlayerId) {
        self.rotate(player, -1);
    }

    pub fn u_turn(&mut self, player: PlayerId) {
        self.rotate(player, 2);
    }

    fn counted_move(&mut self, player: PlayerId, heading: Heading) -> bool {
        if self.state.phase().is_finished() {
            return false;
        }
        let moved = MovementResolver::try_move(&mut self.state, player, heading);
        if moved {
            self.state.increment_move_count();
        }
        moved
    }

    fn rotate(&mut self, id: PlayerId, steps: i32) {
        if self.state.phase().is_finished() {
            return;
        }
        if let Some(player) = self.state.player_mut(id) {
            let heading = player.heading().rotated(steps);
            player.set_heading(heading);
            self.state.push_event(GameEvent::PlayerTurned { player: id, heading });
        }
    }

    // === Snapshots ===

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, self.cards.rng_state())
    }

    /// Rebuild a controller. The card source resumes from the snapshot's
    /// RNG position, or is seeded from the configuration if it has none.
    pub fn restore(snapshot: GameSnapshot) -> GameResult<Self> {
        let cards: Box<dyn CardSource> = match &snapshot.card_rng {
            Some(rng) => Box::new(RandomCardSource::from_state(rng)),
            None => Box::new(RandomCardSource::new(snapshot.config.seed)),
        };
        Self::restore_with_source(snapshot, cards)
    }

    pub fn restore_with_source(snapshot: GameSnapshot, cards: Box<dyn CardSource>) -> GameResult<Self> {
        let state = snapshot.into_state()?;
        Ok(Self { state, cards })
    }
}

/// Warn when the board's checkpoints do not match the win threshold.
/// Returns whether a warning was logged.
fn warn_on_checkpoint_mismatch(config: &GameConfig, board: &Board) -> bool {
    let on_board = board.checkpoint_count();
    if on_board == config.checkpoint_count as usize {
        return false;
    }
    log::warn!(
        "board {:?} has {on_board} checkpoint(s) but {} are needed to win",
        board.name(),
        config.checkpoint_count
    );
    true
}
