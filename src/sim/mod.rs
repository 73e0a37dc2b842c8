//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame deltas, no clock
//! - Stable iteration order (column by column, then row)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, Paddle};
pub use tick::{TickOutcome, TickReport, collide_bricks, move_ball, move_paddle, tick};
