// src/controllers/keyboard.rs
//
// WASD (and the arrow keys) slide, R starts a new game.

use nannou::prelude::*;

use super::InputCommand;
use crate::models::Direction;

pub fn command_for_key(key: Key) -> Option<InputCommand> {
    let command = match key {
        Key::W | Key::Up => InputCommand::Slide(Direction::Up),
        Key::A | Key::Left => InputCommand::Slide(Direction::Left),
        Key::S | Key::Down => InputCommand::Slide(Direction::Down),
        Key::D | Key::Right => InputCommand::Slide(Direction::Right),
        Key::R => InputCommand::Restart,
        _ => return None,
    };
    Some(command)
}
