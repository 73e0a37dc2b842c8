//! Per-frame simulation step
//!
//! Motion is expressed in fixed per-frame deltas; there is no timestep. The
//! order inside a tick is fixed: paddle, ball (walls, floor, paddle), bricks.

use super::collision::{falls_out, hits_ceiling, hits_side_wall, paddle_catches};
use super::state::{GameEvent, GameState, Paddle};

/// Whether the session survives this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Ball left through the bottom edge; the session must be rebuilt
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub events: Vec<GameEvent>,
}

impl TickReport {
    pub fn is_game_over(&self) -> bool {
        self.outcome == TickOutcome::GameOver
    }

    /// `(column, row)` of every brick broken this tick
    pub fn broken_bricks(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            GameEvent::BrickBroken { column, row } => Some((column, row)),
            _ => None,
        })
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickReport {
    let mut events = Vec::new();
    state.frame += 1;

    move_paddle(&mut state.paddle, state.surface.x);

    let outcome = move_ball(state, &mut events);
    if outcome == TickOutcome::Continue {
        collide_bricks(state, &mut events);
    }

    TickReport { outcome, events }
}

/// Step the paddle according to its intent.
///
/// Right is checked first. Both guards look at the position before the move
/// and nothing is clamped, so the paddle can stop up to one step past either
/// edge.
pub fn move_paddle(paddle: &mut Paddle, surface_width: f32) {
    if paddle.intent.right && paddle.right() < surface_width {
        paddle.pos.x += paddle.step;
    } else if paddle.intent.left && paddle.pos.x > 0.0 {
        paddle.pos.x -= paddle.step;
    }
}

/// Move the ball, then reflect it off walls and the paddle.
///
/// Wall tests run after the move and look one more step ahead, so bounces
/// happen a frame before the ball would cross the drawn bounds.
pub fn move_ball(state: &mut GameState, events: &mut Vec<GameEvent>) -> TickOutcome {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if hits_side_wall(ball, state.surface.x) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    if hits_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    if falls_out(ball, state.surface.y) {
        events.push(GameEvent::GameOver);
        return TickOutcome::GameOver;
    }

    if paddle_catches(ball, &state.paddle) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::PaddleBounce);
    }

    TickOutcome::Continue
}

/// Break every visible brick the ball's box overlaps.
///
/// Each hit flips `vel.y` on its own, so two hits in one frame cancel out.
pub fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball_box = state.ball.aabb();

    for (column, row, brick) in state.bricks.iter_mut() {
        if brick.is_visible() && ball_box.overlaps(&brick.rect()) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.break_brick();
            log::debug!("Brick ({}, {}) broken", column, row);
            events.push(GameEvent::BrickBroken { column, row });
        }
    }
}
