//! Phase state machine tests.
//!
//! These tests exercise dealing, the programming/activation round trip,
//! round-robin ordering, interactive cards and the step/run modes.

use robo_rally::board::{BoardBuilder, Position};
use robo_rally::cards::{Command, CommandCard, CycleCardSource};
use robo_rally::core::{CardSlot, GameConfig, GameEvent, Heading, PlayerId};
use robo_rally::rules::{GameController, Phase, TurnChoice};

/// Build a game whose hands are dealt from `deal` in order.
fn game_with_deal(deal: &[Command], players: &[(usize, usize)]) -> (GameController, Vec<PlayerId>) {
    let board = BoardBuilder::new(8, 8).build().unwrap();
    let source = CycleCardSource::new(deal.to_vec());
    let mut game = GameController::with_card_source(GameConfig::new(), board, Box::new(source));
    let ids = players
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let id = game.add_player(format!("Robot {i}"), "blue");
            game.place_player(id, Position::new(x, y)).unwrap();
            id
        })
        .collect();
    (game, ids)
}

fn position(game: &GameController, id: PlayerId) -> Option<Position> {
    game.state().player(id).unwrap().position()
}

#[test]
fn test_initial_phase() {
    let (game, _) = game_with_deal(&[Command::Forward], &[(0, 0)]);
    assert_eq!(game.state().phase(), Phase::Initialisation);
}

#[test]
fn test_start_programming_phase() {
    let deal = [Command::Forward, Command::Right, Command::UTurn];
    let (mut game, ids) = game_with_deal(&deal, &[(0, 0), (1, 1)]);
    game.start_programming_phase().unwrap();

    assert_eq!(game.state().phase(), Phase::Programming);
    assert_eq!(game.state().step(), 0);
    assert_eq!(game.state().current_player_id(), Some(ids[0]));

    // Cards are dealt player by player from the source.
    let hand: Vec<_> = game.state().player(ids[0]).unwrap().hand().iter().map(|f| f.card()).collect();
    assert_eq!(hand.len(), 8);
    assert_eq!(hand[0], Some(CommandCard::new(Command::Forward)));
    assert_eq!(hand[1], Some(CommandCard::new(Command::Right)));
    assert_eq!(hand[2], Some(CommandCard::new(Command::UTurn)));
    assert_eq!(hand[3], Some(CommandCard::new(Command::Forward)));
}

#[test]
fn test_programming_clears_old_program() {
    let (mut game, ids) = game_with_deal(&[Command::Left], &[(0, 0)]);
    game.start_programming_phase().unwrap();
    assert!(game.move_card(CardSlot::hand(ids[0], 0), CardSlot::program(ids[0], 0)));

    game.start_programming_phase().unwrap();
    let player = game.state().player(ids[0]).unwrap();
    assert!(player.program().iter().all(|f| f.is_empty()));
    assert!(player.hand().iter().all(|f| !f.is_empty()));
}

/// PROGRAMMING -> ACTIVATION resets step and current player.
#[test]
fn test_finish_programming_round_trip() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(0, 0), (4, 4)]);
    game.start_programming_phase().unwrap();
    game.move_current_player_to_space(Position::new(2, 2));
    assert_eq!(game.state().current_player_id(), Some(ids[1]));

    game.finish_programming_phase().unwrap();
    assert_eq!(game.state().phase(), Phase::Activation);
    assert_eq!(game.state().step(), 0);
    assert_eq!(game.state().current_player_id(), Some(ids[0]));
}

#[test]
fn test_move_card_rules() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(0, 0)]);
    let p = ids[0];
    game.start_programming_phase().unwrap();

    // Hand to empty register works.
    assert!(game.move_card(CardSlot::hand(p, 0), CardSlot::program(p, 0)));
    assert!(game.state().player(p).unwrap().hand()[0].is_empty());

    // Empty source fails.
    assert!(!game.move_card(CardSlot::hand(p, 0), CardSlot::program(p, 1)));
    // Occupied destination fails without changes.
    assert!(!game.move_card(CardSlot::hand(p, 1), CardSlot::program(p, 0)));
    assert!(!game.state().player(p).unwrap().hand()[1].is_empty());
    // Slots that do not exist fail.
    assert!(!game.move_card(CardSlot::hand(p, 1), CardSlot::program(p, 5)));
    assert!(!game.move_card(CardSlot::hand(PlayerId::new(9), 0), CardSlot::program(p, 1)));

    // And back again.
    assert!(game.move_card(CardSlot::program(p, 0), CardSlot::hand(p, 0)));
}

/// Within a register, players act in id order.
#[test]
fn test_round_robin_order() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(0, 0), (0, 1)]);
    game.start_programming_phase().unwrap();
    for &id in &ids {
        assert!(game.move_card(CardSlot::hand(id, 0), CardSlot::program(id, 0)));
    }
    game.finish_programming_phase().unwrap();

    // Robot 0 acts first and pushes robot 1 south.
    game.step_once();
    assert_eq!(position(&game, ids[0]), Some(Position::new(0, 1)));
    assert_eq!(position(&game, ids[1]), Some(Position::new(0, 2)));
    assert_eq!(game.state().current_player_id(), Some(ids[1]));

    game.step_once();
    assert_eq!(position(&game, ids[1]), Some(Position::new(0, 3)));
    assert_eq!(game.state().step(), 1);
    assert_eq!(game.state().current_player_id(), Some(ids[0]));
}

/// Running to completion executes all registers and re-deals.
#[test]
fn test_run_programs_completes_round() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(3, 0)]);
    game.start_programming_phase().unwrap();
    for register in 0..5 {
        assert!(game.move_card(CardSlot::hand(ids[0], register), CardSlot::program(ids[0], register)));
    }
    game.finish_programming_phase().unwrap();
    game.run_programs();

    assert_eq!(game.state().phase(), Phase::Programming);
    assert_eq!(position(&game, ids[0]), Some(Position::new(3, 5)));
    assert_eq!(game.state().move_count(), 5);
    assert_eq!(game.state().step(), 0);
}

#[test]
fn test_registers_revealed_step_by_step() {
    let (mut game, ids) = game_with_deal(&[Command::Right], &[(0, 0)]);
    game.start_programming_phase().unwrap();
    game.finish_programming_phase().unwrap();

    let visible = |game: &GameController| -> Vec<bool> {
        game.state().player(ids[0]).unwrap().program().iter().map(|f| f.is_visible()).collect()
    };
    assert_eq!(visible(&game), vec![true, false, false, false, false]);

    game.step_once();
    assert_eq!(visible(&game), vec![true, true, false, false, false]);
}

#[test]
fn test_interactive_card_in_run_mode() {
    let (mut game, ids) = game_with_deal(&[Command::LeftOrRight, Command::Forward], &[(4, 4), (6, 6)]);
    game.start_programming_phase().unwrap();
    // Robot 0 gets the choice card, robot 1 a forward card.
    assert!(game.move_card(CardSlot::hand(ids[0], 0), CardSlot::program(ids[0], 0)));
    assert!(game.move_card(CardSlot::hand(ids[1], 1), CardSlot::program(ids[1], 0)));
    game.finish_programming_phase().unwrap();
    game.drain_events();

    game.run_programs();
    assert_eq!(game.state().phase(), Phase::PlayerInteraction);
    assert_eq!(game.state().current_player_id(), Some(ids[0]));
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::ChoiceRequired {
        player: ids[0],
        options: vec![Command::Left, Command::Right],
    }));

    // Running again does not spin in the interaction phase.
    game.run_programs();
    assert_eq!(game.state().phase(), Phase::PlayerInteraction);

    // The choice resumes the run to the end of the round.
    game.resolve_player_choice(TurnChoice::Right).unwrap();
    assert_eq!(game.state().player(ids[0]).unwrap().heading(), Heading::West);
    assert_eq!(position(&game, ids[1]), Some(Position::new(6, 7)));
    assert_eq!(game.state().phase(), Phase::Programming);
}

#[test]
fn test_interactive_card_in_step_mode() {
    let (mut game, ids) = game_with_deal(&[Command::LeftOrRight], &[(4, 4), (6, 6)]);
    game.start_programming_phase().unwrap();
    assert!(game.move_card(CardSlot::hand(ids[0], 0), CardSlot::program(ids[0], 0)));
    game.finish_programming_phase().unwrap();

    game.step_once();
    assert_eq!(game.state().phase(), Phase::PlayerInteraction);

    game.resolve_player_choice(TurnChoice::Left).unwrap();
    assert_eq!(game.state().phase(), Phase::Activation);
    assert_eq!(game.state().player(ids[0]).unwrap().heading(), Heading::East);
    // The index advanced exactly as a normal dispatch would.
    assert_eq!(game.state().current_player_id(), Some(ids[1]));
    assert_eq!(game.state().step(), 0);
}

#[test]
fn test_step_outside_activation_is_ignored() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(0, 0)]);
    game.start_programming_phase().unwrap();
    game.step_once();
    game.run_programs();

    assert_eq!(game.state().phase(), Phase::Programming);
    assert_eq!(position(&game, ids[0]), Some(Position::new(0, 0)));
}

#[test]
fn test_status_message() {
    let (mut game, ids) = game_with_deal(&[Command::Forward], &[(0, 0), (5, 5)]);
    assert_eq!(game.status_message(), "Player = Robot 0, Move Count = 0, Checkpoint = 0");

    game.move_forward(ids[0]);
    game.set_current_player(ids[1]).unwrap();
    assert_eq!(game.status_message(), "Player = Robot 1, Move Count = 1, Checkpoint = 0");
}

#[test]
fn test_events_record_phase_changes() {
    let (mut game, _) = game_with_deal(&[Command::Forward], &[(0, 0)]);
    game.drain_events();
    game.start_programming_phase().unwrap();
    game.finish_programming_phase().unwrap();

    let phases: Vec<_> = game
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::PhaseChanged { to, .. } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![Phase::Programming, Phase::Activation]);
}
