pub mod game_controller;
pub mod keyboard;
pub mod osc;

pub use game_controller::GameController;
pub use keyboard::command_for_key;
pub use osc::{OscController, OscError};

use crate::models::Direction;

/// A discrete player input, from the keyboard or over OSC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Slide(Direction),
    Restart,
}
