//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]. It is rebuilt from
//! [`Settings`] at startup and after every game over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::input::MoveIntent;
use crate::settings::{BrickLayout, Settings};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the left or right wall
    WallBounce,
    /// Ball reflected off the top wall
    CeilingBounce,
    PaddleBounce,
    BrickBroken { column: usize, row: usize },
    /// Ball fell past the paddle
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance per frame
    pub step: f32,
    pub intent: MoveIntent,
}

impl Paddle {
    /// Centered horizontally, `bottom_offset` above the surface bottom
    pub fn new(settings: &Settings) -> Self {
        let p = &settings.paddle;
        Self {
            pos: Vec2::new(
                (settings.surface.width - p.width) / 2.0,
                settings.surface.height - p.bottom_offset,
            ),
            width: p.width,
            height: p.height,
            step: p.step,
            intent: MoveIntent::default(),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Centered horizontally, just above the paddle, heading up and right
    pub fn new(settings: &Settings) -> Self {
        let b = &settings.ball;
        Self {
            pos: Vec2::new(
                settings.surface.width / 2.0,
                settings.surface.height - b.bottom_offset,
            ),
            vel: Vec2::new(b.dx, b.dy),
            radius: b.radius,
        }
    }

    /// Bounding box of the ball: center ± radius on both axes
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A single brick. Once broken it stays broken for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pos: Vec2,
    size: Vec2,
    visible: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            visible: true,
        }
    }

    /// Top-left corner
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }

    /// Hide the brick permanently
    pub fn break_brick(&mut self) {
        self.visible = false;
    }
}

/// Fixed columns × rows arrangement of bricks.
///
/// The shape never changes after construction; only visibility does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    /// Column-major: index = column * rows + row
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickLayout) -> Self {
        let size = Vec2::new(layout.width, layout.height);
        let mut bricks = Vec::with_capacity(layout.columns * layout.rows);
        for c in 0..layout.columns {
            for r in 0..layout.rows {
                let x = layout.offset_left + c as f32 * (layout.width + layout.padding);
                let y = layout.offset_top + r as f32 * (layout.height + layout.padding);
                bricks.push(Brick::new(Vec2::new(x, y), size));
            }
        }

        Self {
            columns: layout.columns,
            rows: layout.rows,
            bricks,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.index(column, row).map(|i| &self.bricks[i])
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        self.index(column, row).map(|i| &mut self.bricks[i])
    }

    /// All bricks as `(column, row, brick)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let rows = self.rows;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, brick)| (i / rows, i % rows, brick))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        let rows = self.rows;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, brick)| (i / rows, i % rows, brick))
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_visible()).count()
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Drawing surface size (width, height)
    pub surface: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Ticks since the session started
    pub frame: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            surface: Vec2::new(settings.surface.width, settings.surface.height),
            paddle: Paddle::new(settings),
            ball: Ball::new(settings),
            bricks: BrickGrid::new(&settings.bricks),
            frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let settings = Settings::default();
        let state = GameState::new(&settings);

        // (480 - 75) / 2
        assert_eq!(state.paddle.pos, Vec2::new(202.5, 305.0));
        assert_eq!(state.paddle.intent, MoveIntent::default());
        assert_eq!(state.ball.pos, Vec2::new(240.0, 295.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert!(state.ball.vel.y < 0.0, "ball starts moving up");
        assert!(state.ball.bottom() < state.paddle.top());
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_brick_positions() {
        let grid = BrickGrid::new(&BrickLayout::default());
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.visible_count(), 15);

        assert_eq!(grid.get(0, 0).unwrap().pos(), Vec2::new(30.0, 30.0));
        assert_eq!(grid.get(1, 0).unwrap().pos(), Vec2::new(110.0, 30.0));
        assert_eq!(grid.get(0, 2).unwrap().pos(), Vec2::new(30.0, 90.0));
        assert_eq!(grid.get(4, 2).unwrap().pos(), Vec2::new(350.0, 90.0));
        assert_eq!(grid.get(4, 2).unwrap().size(), Vec2::new(70.0, 20.0));
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn test_iter_reports_column_and_row() {
        let grid = BrickGrid::new(&BrickLayout::default());
        let coords: Vec<(usize, usize)> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords.len(), 15);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        for (c, r, brick) in grid.iter() {
            assert_eq!(grid.get(c, r), Some(brick));
        }
    }

    #[test]
    fn test_break_brick() {
        let mut grid = BrickGrid::new(&BrickLayout::default());
        grid.get_mut(2, 1).unwrap().break_brick();
        assert!(!grid.get(2, 1).unwrap().is_visible());
        assert_eq!(grid.visible_count(), 14);
    }
}
