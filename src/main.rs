use crossterm::terminal;
use ouro::{CliRenderer, Game, Input, RenderMode, Renderer};
use std::io;
use std::time::Instant;

fn main() -> io::Result<()> {
    // Get terminal size and calculate board dimensions.
    let (term_width, term_height) = terminal::size()?;

    // Account for:
    // - Each cell is 2 chars wide, so width = term_width / 2
    // - Reserve 3 lines at the bottom for the HUD
    // - Minimum size of 20x10 for playability
    let board_width = ((term_width / 2) as i32).max(20);
    let board_height = (term_height.saturating_sub(3) as i32).max(10);

    let mut game = Game::new(board_width, board_height, RenderMode::Solid);
    let mut renderer = CliRenderer::new();

    renderer.init()?;

    // First frame, before any tick has run.
    let initial = game.draw_commands();
    renderer.render(&game, &initial)?;

    let mut last_tick = Instant::now();

    loop {
        // Poll for input; invalid turns are dropped inside the core.
        if let Some(input) = renderer.poll_input()? {
            match input {
                Input::Direction(direction) => game.on_direction_input(direction),
                Input::Restart => game.on_restart_input(),
                Input::Quit => break,
            }
        }

        // Advance the simulation at the game's current tick rate; eating
        // food shortens the interval, so re-read it every pass.
        if last_tick.elapsed() >= game.tick_interval() {
            let commands = game.tick();
            renderer.render(&game, &commands)?;
            last_tick = Instant::now();
        }
    }

    renderer.cleanup()?;
    Ok(())
}
