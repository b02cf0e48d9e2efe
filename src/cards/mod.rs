//! Command cards, card slots and card sources.
//!
//! ## Key Types
//!
//! - `Command`: The seven instruction kinds
//! - `CommandCard`: Immutable card wrapping one command
//! - `CommandCardField`: Hand or program slot holding at most one card
//! - `CardSource`: Where dealt cards come from (`RandomCardSource`,
//!   `CycleCardSource`)

pub mod command;
pub mod field;
pub mod source;

pub use command::{Command, CommandCard};
pub use field::CommandCardField;
pub use source::{CardSource, CycleCardSource, RandomCardSource};
