//! Command kinds and the immutable cards that carry them.

use serde::{Deserialize, Serialize};

/// An instruction a robot can be programmed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move one space forward, pushing other robots.
    Forward,
    /// Turn one step right.
    Right,
    /// Turn one step left.
    Left,
    /// Move forward twice; each move is attempted independently.
    FastForward,
    /// Turn around.
    UTurn,
    /// Move one space against the current heading without turning.
    Backward,
    /// Player chooses between turning left or right during activation.
    LeftOrRight,
}

impl Command {
    /// Every command, in dealing order.
    pub const ALL: [Command; 7] = [
        Command::Forward,
        Command::Right,
        Command::Left,
        Command::FastForward,
        Command::UTurn,
        Command::Backward,
        Command::LeftOrRight,
    ];

    /// Short label shown on the card.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Command::Forward => "Fwd",
            Command::Right => "Turn Right",
            Command::Left => "Turn Left",
            Command::FastForward => "Fast Fwd",
            Command::UTurn => "U-Turn",
            Command::Backward => "Backward",
            Command::LeftOrRight => "Left or Right",
        }
    }

    /// Does executing this command require player input?
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Command::LeftOrRight)
    }

    /// The commands a player may pick from when this one is interactive.
    ///
    /// Empty for non-interactive commands.
    #[must_use]
    pub fn options(self) -> &'static [Command] {
        match self {
            Command::LeftOrRight => &[Command::Left, Command::Right],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A command card. Cards are plain values; a hand may hold duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandCard {
    pub command: Command,
}

impl CommandCard {
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self { command }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.command.display_name()
    }
}

impl From<Command> for CommandCard {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Command::Forward.display_name(), "Fwd");
        assert_eq!(Command::LeftOrRight.to_string(), "Left or Right");
        assert_eq!(CommandCard::new(Command::UTurn).name(), "U-Turn");
    }

    #[test]
    fn test_interactive() {
        let interactive: Vec<_> = Command::ALL.iter().filter(|c| c.is_interactive()).collect();
        assert_eq!(interactive, vec![&Command::LeftOrRight]);
        assert_eq!(Command::LeftOrRight.options(), &[Command::Left, Command::Right]);
        assert!(Command::Forward.options().is_empty());
    }

    #[test]
    fn test_cards_are_values() {
        let a = CommandCard::from(Command::Backward);
        let b = CommandCard::new(Command::Backward);
        assert_eq!(a, b);
    }
}
