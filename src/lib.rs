pub mod cli_renderer;
pub mod food;
pub mod game;
pub mod grid;
pub mod orientation;
pub mod renderer;
pub mod snake;

pub use cli_renderer::CliRenderer;
pub use game::{CellColor, DrawCommand, Game, RenderMode, SessionState};
pub use grid::{Cell, Direction};
pub use orientation::{Rotation, SegmentSprite, SpriteVariant};
pub use renderer::{Input, Renderer};
pub use snake::Snake;
