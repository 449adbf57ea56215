// src/controllers/osc.rs
//
// Remote input over OSC.
//   /slide <up|down|left|right>
//   /slide/<direction>
//   /restart

use nannou_osc as osc;
use thiserror::Error;

use super::InputCommand;
use crate::models::Direction;

#[derive(Debug, Error)]
pub enum OscError {
    #[error("failed to bind OSC receiver on port {port}: {reason}")]
    Bind { port: u16, reason: String },
}

pub struct OscController {
    command_queue: Vec<InputCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, OscError> {
        let receiver = osc::receiver(port).map_err(|e| OscError::Bind {
            port,
            reason: e.to_string(),
        })?;
        log::info!("Listening for OSC input on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_command(&message.addr, &message.args[..]) {
                    Some(command) => self.command_queue.push(command),
                    None => log::warn!("Unknown OSC message: {} {:?}", message.addr, message.args),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<InputCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_command(addr: &str, args: &[osc::Type]) -> Option<InputCommand> {
    match (addr, args) {
        ("/slide", [osc::Type::String(direction)]) => direction
            .parse::<Direction>()
            .ok()
            .map(InputCommand::Slide),
        ("/restart", []) => Some(InputCommand::Restart),
        _ => addr
            .strip_prefix("/slide/")
            .filter(|_| args.is_empty())
            .and_then(|direction| direction.parse::<Direction>().ok())
            .map(InputCommand::Slide),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_with_string_arg() {
        let args = vec![osc::Type::String("left".to_string())];
        assert_eq!(
            parse_command("/slide", &args),
            Some(InputCommand::Slide(Direction::Left))
        );
    }

    #[test]
    fn test_slide_in_address() {
        assert_eq!(
            parse_command("/slide/up", &[]),
            Some(InputCommand::Slide(Direction::Up))
        );
        assert_eq!(parse_command("/slide/sideways", &[]), None);
    }

    #[test]
    fn test_restart() {
        assert_eq!(parse_command("/restart", &[]), Some(InputCommand::Restart));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert_eq!(parse_command("/slide", &[]), None);
        assert_eq!(parse_command("/slide", &[osc::Type::Int(1)]), None);
        assert_eq!(
            parse_command("/slide", &[osc::Type::String("diagonal".to_string())]),
            None
        );
        assert_eq!(parse_command("/grid/move", &[]), None);
    }
}
