use super::snake::Segment;

/// The collectible. Lives on a grid cell; eating it grows the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub x: i32,
    pub y: i32,
    size: i32,
}

impl Apple {
    pub fn new(size: i32) -> Self {
        Self { x: 0, y: 0, size }
    }

    /// Move the apple to a new grid cell.
    pub fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Rectangle to draw the apple with.
    pub fn rect(&self) -> Segment {
        Segment::new(self.x, self.y, self.size)
    }
}
