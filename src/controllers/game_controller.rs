// src/controllers/game_controller.rs
/// GameController sits between the driver and the Board.
/// It gates input on the board's state, runs the frame update
/// and raises the game over overlay once the board settles with no moves.
use rand::Rng;

use super::InputCommand;
use crate::config::BoardConfig;
use crate::models::{Board, Direction};
use crate::views::{DrawCommand, GameOverOverlay};

pub struct GameController {
    board: Board,
    overlay: GameOverOverlay,
}

impl GameController {
    pub fn new(config: BoardConfig) -> Self {
        let overlay = GameOverOverlay::new(config.animation.over_fade_secs());
        Self {
            board: Board::new(config),
            overlay,
        }
    }

    /// Wrap an existing board, e.g. one built with `Board::from_rows`.
    pub fn with_board(board: Board) -> Self {
        let overlay = GameOverOverlay::new(board.config().animation.over_fade_secs());
        Self { board, overlay }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn overlay(&self) -> &GameOverOverlay {
        &self.overlay
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.start(rng);
        self.overlay.toggle(false);
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::info!("Restarting game");
        self.start(rng);
    }

    pub fn accepts_input(&self) -> bool {
        !self.board.is_animating() && !self.board.is_over()
    }

    /// Returns whether the command changed the game.
    pub fn handle_command<R: Rng + ?Sized>(&mut self, command: InputCommand, rng: &mut R) -> bool {
        match command {
            InputCommand::Slide(direction) => self.slide(direction, rng),
            InputCommand::Restart => {
                self.restart(rng);
                true
            }
        }
    }

    // input is dropped, not queued, while busy
    fn slide<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if !self.accepts_input() {
            log::debug!("dropping slide {}", direction);
            return false;
        }
        self.board.slide(direction, rng)
    }

    pub fn update(&mut self, dt: f32) {
        self.board.tick(dt);
        self.overlay.update(dt);

        if !self.overlay.is_toggled() && !self.board.is_animating() && self.board.is_over() {
            log::info!("Game over:\n{}", self.board);
            self.overlay.toggle(true);
        }
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let layout = &self.board.config().layout;
        self.board
            .visible_tiles()
            .map(|tile| DrawCommand::for_tile(tile, layout))
            .chain(self.overlay.draw_command(layout))
            .collect()
    }
}
