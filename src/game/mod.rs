//! Core simulation for the snake game
//!
//! Everything in here is pure state and rules: no I/O, no rendering, no
//! terminal dependencies. The front end feeds in time deltas and input
//! snapshots and reads geometry back out.

pub mod apple;
pub mod config;
pub mod engine;
pub mod keys;
pub mod snake;
pub mod vec2;

// Re-export commonly used types
pub use apple::Apple;
pub use config::GameConfig;
pub use engine::{GameEngine, GameState, ResetCause, TickResult};
pub use keys::{GameKey, InputSnapshot};
pub use snake::{MINIMUM_BODY_PARTS, Segment, Snake};
pub use vec2::Vec2;
