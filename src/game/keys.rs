use super::vec2::Vec2;

/// Logical movement keys the simulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
}

/// Snapshot of which movement keys are held for one tick.
///
/// The frame loop fills this from the event stream and hands it to the snake
/// each update, so the core never reaches out to global keyboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl InputSnapshot {
    pub fn press(&mut self, key: GameKey) {
        match key {
            GameKey::Up => self.up = true,
            GameKey::Down => self.down = true,
            GameKey::Left => self.left = true,
            GameKey::Right => self.right = true,
        }
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        match key {
            GameKey::Up => self.up,
            GameKey::Down => self.down,
            GameKey::Left => self.left,
            GameKey::Right => self.right,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Resolve the held keys to a requested direction. When several keys are
    /// held only the first in the fixed priority order counts.
    pub fn direction(&self) -> Vec2 {
        if self.left {
            Vec2::LEFT
        } else if self.right {
            Vec2::RIGHT
        } else if self.up {
            Vec2::UP
        } else if self.down {
            Vec2::DOWN
        } else {
            Vec2::ZERO
        }
    }
}
