use rand::Rng;

use super::{
    apple::Apple,
    config::GameConfig,
    keys::InputSnapshot,
    snake::Snake,
    vec2::Vec2,
};

/// Why the snake was sent back to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The head ran into the body
    SelfCollision,
    /// The head left the playfield
    OutOfBounds,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickResult {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Set when the snake was respawned this tick
    pub reset: Option<ResetCause>,
}

/// Everything the driver owns for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    /// Apples eaten this life; also bounds the self-collision scan
    pub score: u32,
    pub width: i32,
    pub height: i32,
}

impl GameState {
    pub fn new(snake: Snake, apple: Apple, width: i32, height: i32) -> Self {
        Self {
            snake,
            apple,
            score: 0,
            width,
            height,
        }
    }
}

/// The game loop driver: owns the rules, hands out fresh state, advances one
/// tick at a time. There is no game-over phase; losing respawns immediately.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh session state: snake at spawn, apple on a random cell.
    pub fn reset(&mut self) -> GameState {
        let snake = self.spawn_snake();

        let mut apple = Apple::new(self.config.segment_size);
        let (x, y) = self.random_cell();
        apple.place(x, y);

        GameState::new(snake, apple, self.config.width, self.config.height)
    }

    /// Advance the simulation by one tick of `dt` seconds.
    ///
    /// Rule order after the body update: self-collision, bounds, consumption.
    /// A reset replaces the snake and discards the score for this life (the
    /// apple stays where it was) and skips the consumption check for the
    /// tick, so a just-respawned head cannot eat through an apple that
    /// happens to sit on the spawn cell.
    pub fn step(&mut self, state: &mut GameState, dt: f32, input: &InputSnapshot) -> TickResult {
        state.snake.update(dt, input);

        if let Some(cause) = Self::check_reset(state) {
            state.snake = self.spawn_snake();
            state.score = 0;

            return TickResult {
                ate_apple: false,
                reset: Some(cause),
            };
        }

        let (head_x, head_y) = state.snake.head_grid_position();

        if head_x == state.apple.x && head_y == state.apple.y {
            state.score += 1;
            state.snake.grow();

            let (x, y) = self.random_cell();
            state.apple.place(x, y);

            return TickResult {
                ate_apple: true,
                reset: None,
            };
        }

        TickResult::default()
    }

    fn check_reset(state: &GameState) -> Option<ResetCause> {
        let head = state.snake.head();
        let (head_x, head_y) = state.snake.head_grid_position();

        // Scan is bounded by the score, and starts two segments behind the
        // head: the segment directly behind it shares the head's cell while
        // the head glides out of it.
        let scanned = (state.score as usize).min(state.snake.len().saturating_sub(2));
        for i in 0..scanned {
            let segment = state.snake.segment_at(i + 2);
            if head_x == segment.x && head_y == segment.y {
                return Some(ResetCause::SelfCollision);
            }
        }

        if head.x < 0 || head.x >= state.width || head.y < 0 || head.y >= state.height {
            return Some(ResetCause::OutOfBounds);
        }

        None
    }

    fn spawn_snake(&self) -> Snake {
        Snake::new(
            Vec2::new(self.config.spawn_x, self.config.spawn_y),
            self.config.segment_size,
            self.config.initial_body_parts,
            self.config.speed,
        )
    }

    /// A uniformly random grid cell inside the playfield.
    fn random_cell(&mut self) -> (i32, i32) {
        let size = self.config.segment_size;
        let columns = self.config.width / size;
        let rows = self.config.height / size;

        (
            self.rng.gen_range(0..columns) * size,
            self.rng.gen_range(0..rows) * size,
        )
    }
}
