//! Collision predicates
//!
//! Each obstacle has its own test. Walls use a one-step lookahead, bricks a
//! full AABB overlap, and the paddle only checks the ball's center against
//! its horizontal span.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap on both axes. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Whether one more step of `vel.x` would carry the ball past a side wall
pub fn hits_side_wall(ball: &Ball, surface_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > surface_width - ball.radius || next_x < ball.radius
}

/// Whether one more step of `vel.y` would carry the ball past the top wall
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Whether one more step of `vel.y` would carry the ball past the bottom edge
pub fn falls_out(ball: &Ball, surface_height: f32) -> bool {
    ball.pos.y + ball.vel.y > surface_height - ball.radius
}

/// Ball bottom below the paddle top and center strictly inside its span.
///
/// Corners are not tested: a ball overlapping the paddle with its center
/// outside `(left, right)` passes through.
pub fn paddle_catches(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() > paddle.top() && ball.pos.x > paddle.left() && ball.pos.x < paddle.right()
}
