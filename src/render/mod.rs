// src/render/mod.rs
// Drawing the board with nannou

pub mod board_renderer;

pub use board_renderer::BoardRenderer;
