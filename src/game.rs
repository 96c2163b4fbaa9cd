use crate::food;
use crate::grid::{Cell, Direction};
use crate::orientation::{self, Rotation, SpriteVariant};
use crate::snake::Snake;
use std::time::Duration;

/// Starting tick rate, in ticks per second.
pub const INITIAL_SPEED: f32 = 10.0;
/// Fractional speed-up applied per food eaten.
pub const GROWTH_SPEED_FACTOR: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

/// Rendering strategy picked by the platform layer at construction. Solid
/// fills plain colored cells; Sprites runs the orientation resolver and
/// emits one rotated sprite per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Solid,
    Sprites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Snake,
    Food,
}

/// One unit of work for the platform renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    FillCell {
        cell: Cell,
        color: CellColor,
    },
    DrawSprite {
        cell: Cell,
        variant: SpriteVariant,
        rotation: Rotation,
    },
    ClearCell {
        cell: Cell,
    },
}

/// One snake session: board, snake, food, score and speed, plus the
/// Running/GameOver state machine. All mutation happens through
/// [`tick`](Self::tick) and the two input edges; nothing here is shared or
/// concurrent.
pub struct Game {
    pub width: i32,
    pub height: i32,
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub speed: f32,
    pub state: SessionState,
    pub mode: RenderMode,
}

impl Game {
    pub fn new(width: i32, height: i32, mode: RenderMode) -> Self {
        let snake = Snake::new(Cell::new(width / 2, height / 2));
        let mut rng = rand::thread_rng();
        let food = food::place(&mut rng, width, height, &snake.body);

        Self {
            width,
            height,
            snake,
            food,
            score: 0,
            speed: INITIAL_SPEED,
            state: SessionState::Running,
            mode,
        }
    }

    /// Forwarded by the platform for every decoded directional key. Ignored
    /// outside of Running; reversal presses are dropped by the snake itself.
    pub fn on_direction_input(&mut self, direction: Direction) {
        if self.state != SessionState::Running {
            return;
        }
        self.snake.set_pending_direction(direction);
    }

    /// Forwarded for the restart key. Only meaningful in GameOver: puts the
    /// board back to its initial shape and resumes ticking.
    pub fn on_restart_input(&mut self) {
        if self.state != SessionState::GameOver {
            return;
        }
        self.snake.reset(Cell::new(self.width / 2, self.height / 2));
        let mut rng = rand::thread_rng();
        self.food = food::place(&mut rng, self.width, self.height, &self.snake.body);
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.state = SessionState::Running;
    }

    /// Run one simulation tick and emit the draw commands for the frame.
    ///
    /// Ticks are a no-op once the game is over, and the tick that detects
    /// the collision emits nothing, so the platform keeps showing the last
    /// frame until a restart arrives.
    pub fn tick(&mut self) -> Vec<DrawCommand> {
        if self.state != SessionState::Running {
            return Vec::new();
        }

        self.snake.apply_pending_direction();
        self.snake.step(self.width, self.height);

        if self.snake.head() == self.food {
            self.snake.grow();
            self.score += 1;
            self.speed *= 1.0 + GROWTH_SPEED_FACTOR;
            let mut rng = rand::thread_rng();
            self.food = food::place(&mut rng, self.width, self.height, &self.snake.body);
        } else if self.snake.self_collision() {
            self.state = SessionState::GameOver;
            return Vec::new();
        }

        self.draw_commands()
    }

    /// Interval the platform loop should sleep between ticks. Speed governs
    /// pacing only, never the per-tick logic.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.speed)
    }

    /// Draw commands for the current frame: the vacated tail cell cleared,
    /// every segment, then the food. Public so a renderer can request a full
    /// frame outside of a tick (first frame, post-restart repaint).
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.snake.body.len() + 2);

        if let Some(cell) = self.snake.last_removed {
            commands.push(DrawCommand::ClearCell { cell });
        }

        match self.mode {
            RenderMode::Solid => {
                for &cell in &self.snake.body {
                    commands.push(DrawCommand::FillCell {
                        cell,
                        color: CellColor::Snake,
                    });
                }
            }
            RenderMode::Sprites => {
                let sprites = orientation::resolve(&self.snake.body, self.snake.direction);
                for (&cell, sprite) in self.snake.body.iter().zip(sprites) {
                    commands.push(DrawCommand::DrawSprite {
                        cell,
                        variant: sprite.variant,
                        rotation: sprite.rotation,
                    });
                }
            }
        }

        commands.push(DrawCommand::FillCell {
            cell: self.food,
            color: CellColor::Food,
        });

        commands
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        /// Random play never breaks the session invariants: the body stays
        /// non-empty and in bounds, the food stays off the body while the
        /// game is running, and length grows in lockstep with score.
        #[test]
        fn prop_random_play_preserves_session_invariants(
            inputs in prop::collection::vec(direction_strategy(), 1..300)
        ) {
            let mut game = Game::new(12, 12, RenderMode::Solid);

            for direction in inputs {
                game.on_direction_input(direction);
                game.tick();

                prop_assert!(!game.snake.body.is_empty());
                let head = game.snake.head();
                prop_assert!((0..game.width).contains(&head.x));
                prop_assert!((0..game.height).contains(&head.y));

                if game.state == SessionState::Running {
                    prop_assert!(!game.snake.body.contains(&game.food));
                }
                prop_assert_eq!(
                    game.snake.body.len() as u32,
                    game.score + 1,
                    "body length must stay one ahead of the score"
                );
            }
        }

        /// Every frame after a game over is empty until a restart, which
        /// resumes from the initial one-cell shape.
        #[test]
        fn prop_game_over_is_quiescent_until_restart(
            inputs in prop::collection::vec(direction_strategy(), 1..300)
        ) {
            let mut game = Game::new(10, 10, RenderMode::Solid);

            for direction in inputs {
                game.on_direction_input(direction);
                game.tick();

                if game.state == SessionState::GameOver {
                    prop_assert!(game.tick().is_empty());
                    game.on_restart_input();
                    prop_assert_eq!(game.state, SessionState::Running);
                    prop_assert_eq!(game.snake.body.len(), 1);
                    prop_assert_eq!(game.score, 0);
                }
            }
        }
    }
}
