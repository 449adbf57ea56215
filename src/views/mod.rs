pub mod draw_command;
pub mod layout;
pub mod overlay;
pub mod palette;

pub use draw_command::DrawCommand;
pub use layout::Layout;
pub use overlay::GameOverOverlay;
pub use palette::tile_color;
