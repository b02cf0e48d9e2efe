//! Field actions: behaviour bound to board spaces.
//!
//! - `FieldAction::ConveyorBelt`: moves the occupant one space if free
//! - `FieldAction::CheckPoint`: sequential progress towards winning
//!
//! The controller invokes every action of each player's space once per
//! register step, in player order and attachment order.

mod field_action;

pub use field_action::FieldAction;
