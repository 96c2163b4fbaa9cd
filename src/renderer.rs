use crate::game::{DrawCommand, Game};
use crate::grid::Direction;
use std::io;

/// Decoded platform input, already collapsed to what the core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Direction(Direction),
    Restart,
    Quit,
}

/// Trait that abstracts the rendering implementation.
/// This allows for different backends (CLI, GUI, ...) over the same core.
pub trait Renderer {
    /// Initialize the renderer
    fn init(&mut self) -> io::Result<()>;

    /// Apply one frame's draw commands and refresh the HUD
    fn render(&mut self, game: &Game, commands: &[DrawCommand]) -> io::Result<()>;

    /// Clean up and restore terminal/display state
    fn cleanup(&mut self) -> io::Result<()>;

    /// Poll for input from the user
    fn poll_input(&mut self) -> io::Result<Option<Input>>;
}
