//! Card sources used when dealing hands.
//!
//! The controller draws every dealt card from a `CardSource`. The default
//! `RandomCardSource` is seeded so games are reproducible; `CycleCardSource`
//! deals a fixed sequence for tests and scripted scenarios.

use super::command::{Command, CommandCard};
use crate::core::rng::{GameRng, GameRngState};

/// Supplies cards when hands are dealt.
pub trait CardSource: std::fmt::Debug {
    /// Draw the next card.
    fn draw_card(&mut self) -> CommandCard;

    /// RNG position to store in snapshots, for RNG-backed sources.
    fn rng_state(&self) -> Option<GameRngState> {
        None
    }
}

/// Draws uniformly among all commands.
#[derive(Clone, Debug)]
pub struct RandomCardSource {
    rng: GameRng,
}

impl RandomCardSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a source with a non-deterministic seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume from a saved RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl CardSource for RandomCardSource {
    fn draw_card(&mut self) -> CommandCard {
        let idx = self.rng.gen_index(Command::ALL.len());
        CommandCard::new(Command::ALL[idx])
    }

    fn rng_state(&self) -> Option<GameRngState> {
        Some(self.state())
    }
}

/// Deals the given commands in order, starting over when exhausted.
#[derive(Clone, Debug)]
pub struct CycleCardSource {
    commands: Vec<Command>,
    next: usize,
}

impl CycleCardSource {
    /// Panics if `commands` is empty.
    #[must_use]
    pub fn new(commands: impl Into<Vec<Command>>) -> Self {
        let commands = commands.into();
        assert!(!commands.is_empty(), "Card cycle must not be empty");
        Self { commands, next: 0 }
    }
}

impl CardSource for CycleCardSource {
    fn draw_card(&mut self) -> CommandCard {
        let command = self.commands[self.next];
        self.next = (self.next + 1) % self.commands.len();
        CommandCard::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_source_is_seeded() {
        let mut a = RandomCardSource::new(5);
        let mut b = RandomCardSource::new(5);
        for _ in 0..30 {
            assert_eq!(a.draw_card(), b.draw_card());
        }
    }

    #[test]
    fn test_random_source_covers_commands() {
        let mut source = RandomCardSource::new(11);
        let drawn: Vec<_> = (0..500).map(|_| source.draw_card().command).collect();
        for command in Command::ALL {
            assert!(drawn.contains(&command), "{command:?} never dealt");
        }
    }

    #[test]
    fn test_random_source_resume() {
        let mut source = RandomCardSource::new(3);
        source.draw_card();
        let state = source.state();
        let expected = source.draw_card();
        assert_eq!(RandomCardSource::from_state(&state).draw_card(), expected);
        assert!(CycleCardSource::new(vec![Command::Left]).rng_state().is_none());
    }

    #[test]
    fn test_cycle_source_wraps() {
        let mut source = CycleCardSource::new(vec![Command::Forward, Command::Left]);
        let drawn: Vec<_> = (0..5).map(|_| source.draw_card().command).collect();
        assert_eq!(
            drawn,
            vec![Command::Forward, Command::Left, Command::Forward, Command::Left, Command::Forward]
        );
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_cycle_source_empty() {
        let _ = CycleCardSource::new(Vec::new());
    }
}
