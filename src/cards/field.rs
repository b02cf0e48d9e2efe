//! Card slots used for hands and program registers.

use serde::{Deserialize, Serialize};

use super::command::CommandCard;

/// A slot that holds at most one card plus a visibility flag.
///
/// Both program registers and hand slots are `CommandCardField`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCardField {
    card: Option<CommandCard>,
    visible: bool,
}

impl Default for CommandCardField {
    fn default() -> Self {
        Self {
            card: None,
            visible: true,
        }
    }
}

impl CommandCardField {
    /// Create an empty, visible slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn card(&self) -> Option<CommandCard> {
        self.card
    }

    pub fn set_card(&mut self, card: Option<CommandCard>) {
        self.card = card;
    }

    /// Remove and return the card in this slot.
    pub fn take_card(&mut self) -> Option<CommandCard> {
        self.card.take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Command;

    #[test]
    fn test_new_field_is_empty_and_visible() {
        let field = CommandCardField::new();
        assert!(field.is_empty());
        assert!(field.is_visible());
    }

    #[test]
    fn test_take_card() {
        let mut field = CommandCardField::new();
        field.set_card(Some(CommandCard::new(Command::Left)));
        assert!(!field.is_empty());

        assert_eq!(field.take_card(), Some(CommandCard::new(Command::Left)));
        assert!(field.is_empty());
        assert_eq!(field.take_card(), None);
    }
}
