//! Canvas Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, physics step)
//! - `input`: Keyboard intent tracking
//! - `renderer`: Drawing onto a 2D surface
//! - `game_loop`: Per-frame orchestration and session reset
//! - `platform`: Browser/headless frame scheduling
//! - `settings`: Data-driven game configuration

pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameReport, GameOverNotifier, Session};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Surface dimensions used when the host does not provide any
    pub const SURFACE_WIDTH: f32 = 480.0;
    pub const SURFACE_HEIGHT: f32 = 320.0;

    /// Paddle defaults - sits near the bottom edge, centered
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the bottom of the surface to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 15.0;
    /// Horizontal distance covered per frame while a direction is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Distance from the bottom of the surface to the ball's starting center
    pub const BALL_BOTTOM_OFFSET: f32 = 25.0;
    /// Per-frame velocity at launch (up and to the right)
    pub const BALL_DX: f32 = 2.0;
    pub const BALL_DY: f32 = -2.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Palette
    pub const PADDLE_COLOR: &str = "#c0392b";
    pub const BALL_COLOR: &str = "#2980b9";
    pub const BRICK_COLOR: &str = "#27ae60";

    pub const GAME_OVER_MESSAGE: &str = "Game over!";
}
