use std::collections::VecDeque;

use super::keys::InputSnapshot;
use super::vec2::Vec2;

/// A snake never shrinks below this many segments.
pub const MINIMUM_BODY_PARTS: usize = 2;

/// One grid cell occupied by the snake's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Segment {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }

    /// The grid cell this segment's origin falls in, as a snapped coordinate pair.
    pub fn grid_position(&self, size: i32) -> (i32, i32) {
        (self.x.div_euclid(size) * size, self.y.div_euclid(size) * size)
    }
}

/// The player-controlled segmented body.
///
/// The head glides continuously across the plane (`position` holds the exact
/// sub-grid location) while the trailing segments jump in whole grid steps,
/// so the body always reads as a chain of aligned cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Ordered segments, front = head, back = tail.
    segments: VecDeque<Segment>,
    /// Continuous head location, independent of the snapped head segment.
    position: Vec2,
    direction: Vec2,
    size: i32,
    speed: f32,
}

impl Snake {
    pub fn new(position: Vec2, size: i32, body_parts: usize, speed: f32) -> Self {
        let part = Segment::new(position.x.round() as i32, position.y.round() as i32, size);

        let mut segments = VecDeque::new();
        segments.push_back(part);
        segments.push_back(part);

        let mut snake = Self {
            segments,
            position,
            direction: Vec2::ZERO,
            size,
            speed,
        };

        for _ in MINIMUM_BODY_PARTS..body_parts {
            snake.grow();
        }

        snake
    }

    /// Advance the simulation by `dt` seconds with the given held-key snapshot.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        self.process_input(input);

        self.position += self.speed * dt * self.direction;

        self.update_head();
        self.update_body();
    }

    /// Append a duplicate of the tail segment, extending the body by one cell
    /// without displacing any existing segment.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        self.segments.push_back(tail);
    }

    /// Drop the tail segment. No-op once the body is at its minimum length.
    pub fn shrink(&mut self) {
        if self.segments.len() <= MINIMUM_BODY_PARTS {
            return;
        }

        self.segments.pop_back();
    }

    pub fn head(&self) -> &Segment {
        self.segments.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> &Segment {
        self.segments.back().expect("snake body is never empty")
    }

    /// Segment at `index` counted from the head. Panics when out of range;
    /// indexing past the tail is a caller bug, not a game event.
    pub fn segment_at(&self, index: usize) -> &Segment {
        &self.segments[index]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Segment> + DoubleEndedIterator {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Grid cell currently occupied by the head.
    pub fn head_grid_position(&self) -> (i32, i32) {
        self.head().grid_position(self.size)
    }

    /// Turn handling. Only the highest-priority held key is honored; the turn
    /// is dropped when it would not change the direction or would reverse it
    /// outright (an instant U-turn would self-intersect).
    fn process_input(&mut self, input: &InputSnapshot) {
        let requested = input.direction();

        if requested == Vec2::ZERO
            || requested == self.direction
            || requested == -self.direction
        {
            return;
        }

        self.direction = requested;

        // Snap the continuous position to the grid and re-place the whole
        // body from it before committing to the new direction of travel.
        let size = self.size as f32;
        self.position.x = (self.position.x / size).round() * size;
        self.position.y = (self.position.y / size).round() * size;

        self.update_head();
        self.update_body();

        // Half-cell nudge: guarantees a reversal on the very next tick cannot
        // retrace into the cell the body just vacated.
        self.position += size * 0.5 * self.direction;
    }

    fn update_head(&mut self) {
        let x = self.position.x.round() as i32;
        let y = self.position.y.round() as i32;

        let head = self.segments.front_mut().expect("snake body is never empty");
        head.x = x;
        head.y = y;
    }

    /// Propagate head motion down the chain: for every whole grid step the
    /// head has advanced past the second segment, rotate the segment window
    /// forward by one cell (pop the tail, push a copy of the head).
    fn update_body(&mut self) {
        let head = *self.head();
        let second = self.segments[1];

        let head_distance = ((second.x - head.x).abs() + (second.y - head.y).abs()) as usize;
        let mut remaining = (head_distance / self.size as usize).min(self.segments.len() - 1);

        let dir_x = self.direction.x as i32;
        let dir_y = self.direction.y as i32;

        while remaining > 0 {
            let step = self.size * (remaining as i32 - 1);
            let next = self.segments.front_mut().expect("snake body is never empty");

            next.x = head.x - dir_x * step;
            next.y = head.y - dir_y * step;

            // When travelling in a negative direction off the grid, integer
            // truncation below would snap one cell too far back.
            if self.direction.x <= -1.0 && head.x % self.size != 0 {
                next.x += self.size;
            }
            if self.direction.y <= -1.0 && head.y % self.size != 0 {
                next.y += self.size;
            }

            next.x = next.x / self.size * self.size;
            next.y = next.y / self.size * self.size;

            self.segments.pop_back();
            self.segments.push_front(head);

            remaining -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::keys::GameKey;

    fn spawn() -> Snake {
        Snake::new(Vec2::new(300.0, 300.0), 10, 10, 100.0)
    }

    fn held(key: GameKey) -> InputSnapshot {
        let mut input = InputSnapshot::default();
        input.press(key);
        input
    }

    #[test]
    fn test_new_snake_is_stacked_at_spawn() {
        let snake = spawn();

        assert_eq!(snake.len(), 10);
        assert_eq!(snake.direction(), Vec2::ZERO);
        assert_eq!(snake.position(), Vec2::new(300.0, 300.0));

        for segment in snake.iter() {
            assert_eq!(*segment, Segment::new(300, 300, 10));
        }
    }

    #[test]
    fn test_new_snake_never_below_minimum() {
        let snake = Snake::new(Vec2::new(300.0, 300.0), 10, 0, 100.0);
        assert_eq!(snake.len(), MINIMUM_BODY_PARTS);
    }

    #[test]
    fn test_grow_appends_tail_duplicate() {
        let mut snake = spawn();
        let before: Vec<Segment> = snake.iter().copied().collect();

        snake.grow();
        snake.grow();

        assert_eq!(snake.len(), 12);
        assert_eq!(snake.tail(), &before[before.len() - 1]);
        // Pre-existing segments are untouched by growth.
        for (i, segment) in before.iter().enumerate() {
            assert_eq!(snake.segment_at(i), segment);
        }
    }

    #[test]
    fn test_shrink_stops_at_minimum() {
        let mut snake = Snake::new(Vec2::new(300.0, 300.0), 10, 3, 100.0);

        snake.shrink();
        assert_eq!(snake.len(), 2);

        snake.shrink();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_turn_rejects_zero_same_and_opposite() {
        let mut snake = spawn();
        snake.update(0.0, &held(GameKey::Right));
        assert_eq!(snake.direction(), Vec2::RIGHT);

        let position = snake.position();

        snake.process_input(&InputSnapshot::default());
        assert_eq!(snake.direction(), Vec2::RIGHT);
        assert_eq!(snake.position(), position);

        snake.process_input(&held(GameKey::Right));
        assert_eq!(snake.position(), position);

        snake.process_input(&held(GameKey::Left));
        assert_eq!(snake.direction(), Vec2::RIGHT);
        assert_eq!(snake.position(), position);
    }

    #[test]
    fn test_key_priority_honors_first_match_only() {
        let mut snake = spawn();
        snake.update(0.0, &held(GameKey::Right));

        // Left outranks up; as a reversal it is dropped entirely rather than
        // falling through to the next held key.
        let mut both = InputSnapshot::default();
        both.press(GameKey::Left);
        both.press(GameKey::Up);
        snake.process_input(&both);

        assert_eq!(snake.direction(), Vec2::RIGHT);
    }

    #[test]
    fn test_accepted_turn_snaps_then_nudges_half_cell() {
        let mut snake = spawn();

        snake.update(0.0, &held(GameKey::Right));
        assert_eq!(snake.position(), Vec2::new(305.0, 300.0));

        // Glide to x = 312, then turn up: 312 snaps to 310, nudge moves the
        // continuous position half a cell along the new direction.
        snake.update(0.07, &InputSnapshot::default());
        assert_eq!(snake.position(), Vec2::new(312.0, 300.0));

        snake.process_input(&held(GameKey::Up));
        assert_eq!(snake.direction(), Vec2::UP);
        assert_eq!(snake.position(), Vec2::new(310.0, 295.0));
        assert_eq!(snake.head(), &Segment::new(310, 300, 10));
    }

    #[test]
    fn test_snap_rounds_half_away_from_zero() {
        let mut snake = spawn();
        snake.update(0.0, &held(GameKey::Right));
        snake.update(0.1, &InputSnapshot::default());
        assert_eq!(snake.position(), Vec2::new(315.0, 300.0));

        snake.process_input(&held(GameKey::Down));
        assert_eq!(snake.position(), Vec2::new(320.0, 305.0));
    }

    #[test]
    fn test_subgrid_motion_leaves_body_in_place() {
        let mut snake = spawn();

        // Turn accepted at spawn, nudge to 305, then 4px of travel: the head
        // is 9px ahead of the second segment, under one full grid step.
        snake.update(0.04, &held(GameKey::Right));

        assert_eq!(snake.head().x, 309);
        for segment in snake.iter().skip(1) {
            assert_eq!(*segment, Segment::new(300, 300, 10));
        }
    }

    #[test]
    fn test_full_step_relocates_exactly_one_segment() {
        let mut snake = spawn();
        snake.update(0.04, &held(GameKey::Right));

        // 4 more px puts the head a whole cell ahead; one trailing segment
        // moves up to the cell behind it, the rest stay put.
        snake.update(0.04, &held(GameKey::Right));

        assert_eq!(snake.len(), 10);
        assert_eq!(snake.segment_at(1), &Segment::new(310, 300, 10));
        for segment in snake.iter().skip(2) {
            assert_eq!(*segment, Segment::new(300, 300, 10));
        }
    }

    #[test]
    fn test_body_rotation_capped_at_len_minus_one() {
        let mut snake = spawn();

        // 1000px of travel in one tick: far more grid steps than segments.
        snake.update(10.0, &held(GameKey::Right));

        assert_eq!(snake.len(), 10);
        assert_eq!(snake.head().x, 1305);
        for (i, segment) in snake.iter().enumerate().skip(1) {
            assert_eq!(segment.x, 1310 - 10 * i as i32);
            assert_eq!(segment.y, 300);
        }
    }

    #[test]
    fn test_negative_direction_off_grid_correction() {
        let mut snake = spawn();

        // Nudge to 295, then 7px left: head at 288, trailing cell lands on
        // 290 rather than snapping back to 280.
        snake.update(0.07, &held(GameKey::Left));

        assert_eq!(snake.head().x, 288);
        assert_eq!(snake.segment_at(1), &Segment::new(290, 300, 10));
    }

    #[test]
    fn test_trailing_segments_stay_grid_aligned() {
        let mut snake = spawn();
        snake.update(0.033, &held(GameKey::Right));
        snake.update(0.033, &InputSnapshot::default());
        snake.update(0.033, &held(GameKey::Down));
        snake.update(0.033, &InputSnapshot::default());
        snake.update(0.033, &held(GameKey::Left));

        for segment in snake.iter().skip(1) {
            assert_eq!(segment.x % 10, 0, "segment x off grid: {segment:?}");
            assert_eq!(segment.y % 10, 0, "segment y off grid: {segment:?}");
        }
    }

    #[test]
    fn test_iter_supports_tail_first_body_walk() {
        let mut snake = spawn();
        snake.update(0.1, &held(GameKey::Right));
        snake.update(0.1, &held(GameKey::Right));

        // The renderer walks the body from the tail forward, head excluded.
        let body: Vec<Segment> = snake.iter().skip(1).rev().copied().collect();

        assert_eq!(body.len(), snake.len() - 1);
        assert_eq!(body[body.len() - 1], *snake.segment_at(1));
        assert_eq!(body[0], *snake.tail());
        assert!(!body.contains(snake.head()));
    }

    #[test]
    #[should_panic]
    fn test_segment_at_out_of_range_panics() {
        let snake = spawn();
        snake.segment_at(10);
    }
}
