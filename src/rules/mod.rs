//! Game rules: phases, movement resolution and the controller.
//!
//! - `Phase`: the turn state machine's states
//! - `MovementResolver`: two-pass push-chain resolution
//! - `GameController`: dealing, activation, field actions, win detection

pub mod controller;
pub mod movement;
pub mod phase;

pub use controller::GameController;
pub use movement::{MovementResolver, PushChain};
pub use phase::{Phase, TurnChoice};
