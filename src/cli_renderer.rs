use crate::game::{CellColor, DrawCommand, Game, SessionState};
use crate::grid::{Cell, Direction};
use crate::orientation::{Rotation, SpriteVariant};
use crate::renderer::{Input, Renderer};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

const INPUT_POLL: Duration = Duration::from_millis(10);

pub struct CliRenderer {
    /// Set while the last rendered frame showed a game over, so the next
    /// running frame knows to repaint the whole board.
    showed_game_over: bool,
}

impl CliRenderer {
    pub fn new() -> Self {
        Self {
            showed_game_over: false,
        }
    }

    /// Terminal glyph for a sprite, two characters per cell. The CLI has no
    /// real sprite rotation, so each (variant, rotation) pair degrades to a
    /// fixed glyph.
    fn sprite_glyph(variant: SpriteVariant, rotation: Rotation) -> &'static str {
        match (variant, rotation) {
            (SpriteVariant::Head, Rotation::R0) => "^^",
            (SpriteVariant::Head, Rotation::R90) => "<<",
            (SpriteVariant::Head, Rotation::R180) => "vv",
            (SpriteVariant::Head, Rotation::R270) => ">>",
            (SpriteVariant::Straight, Rotation::R0 | Rotation::R180) => "||",
            (SpriteVariant::Straight, Rotation::R90 | Rotation::R270) => "==",
            (SpriteVariant::Corner, Rotation::R0) => "'+",
            (SpriteVariant::Corner, Rotation::R90) => ",+",
            (SpriteVariant::Corner, Rotation::R180) => "+,",
            (SpriteVariant::Corner, Rotation::R270) => "+'",
            (SpriteVariant::Tail, Rotation::R0) => "''",
            (SpriteVariant::Tail, Rotation::R90) => "--",
            (SpriteVariant::Tail, Rotation::R180) => ",,",
            (SpriteVariant::Tail, Rotation::R270) => "--",
        }
    }

    fn move_to(cell: Cell, stdout: &mut io::Stdout) -> io::Result<()> {
        // Each cell is two terminal columns wide.
        queue!(stdout, cursor::MoveTo((cell.x * 2) as u16, cell.y as u16))
    }

    fn apply_command(&self, command: &DrawCommand, stdout: &mut io::Stdout) -> io::Result<()> {
        match *command {
            DrawCommand::FillCell { cell, color } => {
                Self::move_to(cell, stdout)?;
                let background = match color {
                    CellColor::Snake => Color::Green,
                    CellColor::Food => Color::Red,
                };
                queue!(stdout, SetBackgroundColor(background), Print("  "), ResetColor)?;
            }
            DrawCommand::DrawSprite {
                cell,
                variant,
                rotation,
            } => {
                Self::move_to(cell, stdout)?;
                queue!(
                    stdout,
                    SetBackgroundColor(Color::DarkGreen),
                    SetForegroundColor(Color::Black),
                    Print(Self::sprite_glyph(variant, rotation)),
                    ResetColor
                )?;
            }
            DrawCommand::ClearCell { cell } => {
                Self::move_to(cell, stdout)?;
                queue!(stdout, SetBackgroundColor(Color::Black), Print("  "), ResetColor)?;
            }
        }
        Ok(())
    }

    fn draw_hud(&self, game: &Game, stdout: &mut io::Stdout) -> io::Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, game.height as u16),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "Score: {}  Speed: {:.1} ticks/s",
                game.score, game.speed
            )),
            cursor::MoveTo(0, (game.height + 1) as u16),
            Print("Controls: Arrow Keys / WASD to steer | Q to quit")
        )?;

        queue!(stdout, cursor::MoveTo(0, (game.height + 2) as u16))?;
        if game.state == SessionState::GameOver {
            queue!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("GAME OVER! Press R to restart"),
                ResetColor
            )?;
        } else {
            queue!(stdout, terminal::Clear(ClearType::CurrentLine))?;
        }

        Ok(())
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CliRenderer {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;
        Ok(())
    }

    fn render(&mut self, game: &Game, commands: &[DrawCommand]) -> io::Result<()> {
        let mut stdout = io::stdout();

        // Coming back from a game over, the stale body is still painted on
        // the alternate screen: wipe it before applying the fresh frame.
        if self.showed_game_over && game.state == SessionState::Running {
            queue!(stdout, ResetColor, terminal::Clear(ClearType::All))?;
        }
        self.showed_game_over = game.state == SessionState::GameOver;

        for command in commands {
            self.apply_command(command, &mut stdout)?;
        }

        self.draw_hud(game, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            ResetColor
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        if event::poll(INPUT_POLL)? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(Some(Input::Quit));
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        return Ok(Some(Input::Restart));
                    }
                    KeyCode::Up | KeyCode::Char('w') => {
                        return Ok(Some(Input::Direction(Direction::Up)))
                    }
                    KeyCode::Down | KeyCode::Char('s') => {
                        return Ok(Some(Input::Direction(Direction::Down)))
                    }
                    KeyCode::Left | KeyCode::Char('a') => {
                        return Ok(Some(Input::Direction(Direction::Left)))
                    }
                    KeyCode::Right | KeyCode::Char('d') => {
                        return Ok(Some(Input::Direction(Direction::Right)))
                    }
                    _ => {}
                }
            }
        }
        Ok(None)
    }
}

impl Drop for CliRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
