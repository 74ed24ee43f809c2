use serde::{Deserialize, Serialize};

/// Configuration for one game session. All values are fixed once play starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Side length of one body segment / grid cell, in pixels
    pub segment_size: i32,
    /// Head speed in pixels per second
    pub speed: f32,
    /// Where the snake (re)spawns
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Number of segments a freshly spawned snake has
    pub initial_body_parts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1250,
            height: 700,
            segment_size: 10,
            speed: 100.0,
            spawn_x: 300.0,
            spawn_y: 300.0,
            initial_body_parts: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom playfield size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self {
            width: 100,
            height: 100,
            spawn_x: 50.0,
            spawn_y: 50.0,
            initial_body_parts: 3,
            ..Default::default()
        }
    }
}
