//! Rendering module
//!
//! Draws the current state onto anything implementing [`Surface`]. Drawing
//! only reads the state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::settings::{Color, Palette};
use crate::sim::GameState;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// A 2D drawing target
pub trait Surface {
    fn clear_rect(&mut self, pos: Vec2, size: Vec2);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color);
}

/// Clear the surface and draw bricks, paddle and ball, in that order
pub fn render<S: Surface + ?Sized>(state: &GameState, palette: &Palette, surface: &mut S) {
    surface.clear_rect(Vec2::ZERO, state.surface);

    for (_, _, brick) in state.bricks.iter() {
        if brick.is_visible() {
            surface.fill_rect(brick.pos(), brick.size(), &palette.brick);
        }
    }

    let paddle = &state.paddle;
    surface.fill_rect(
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
        &palette.paddle,
    );

    surface.fill_circle(state.ball.pos, state.ball.radius, &palette.ball);
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _pos: Vec2, _size: Vec2) {}
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: &Color) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &Color) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::settings::Settings;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Clear(Vec2, Vec2),
        Rect(Vec2, Vec2, Color),
        Circle(Vec2, f32, Color),
    }

    /// Records every draw call for inspection
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn clear_rect(&mut self, pos: Vec2, size: Vec2) {
            self.calls.push(DrawCall::Clear(pos, size));
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &Color) {
            self.calls.push(DrawCall::Rect(pos, size, color.clone()));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &Color) {
            self.calls.push(DrawCall::Circle(center, radius, color.clone()));
        }
    }

    #[test]
    fn test_render_order_and_colors() {
        let settings = Settings::default();
        let state = GameState::new(&settings);
        let mut surface = RecordingSurface::default();

        render(&state, &settings.palette, &mut surface);

        // clear + 15 bricks + paddle + ball
        assert_eq!(surface.calls.len(), 18);
        assert_eq!(
            surface.calls[0],
            DrawCall::Clear(Vec2::ZERO, Vec2::new(480.0, 320.0))
        );
        assert_eq!(
            surface.calls[1],
            DrawCall::Rect(
                Vec2::new(30.0, 30.0),
                Vec2::new(70.0, 20.0),
                Color::new("#27ae60")
            )
        );
        assert_eq!(
            surface.calls[16],
            DrawCall::Rect(
                Vec2::new(202.5, 305.0),
                Vec2::new(75.0, 10.0),
                Color::new("#c0392b")
            )
        );
        assert_eq!(
            surface.calls[17],
            DrawCall::Circle(Vec2::new(240.0, 295.0), 5.0, Color::new("#2980b9"))
        );
    }

    #[test]
    fn test_broken_bricks_not_drawn() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        state.bricks.get_mut(0, 0).unwrap().break_brick();
        state.bricks.get_mut(3, 1).unwrap().break_brick();
        let before = state.clone();

        let mut surface = RecordingSurface::default();
        render(&state, &settings.palette, &mut surface);

        let bricks = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect(_, _, color) if *color == settings.palette.brick))
            .count();
        assert_eq!(bricks, 13);
        assert_eq!(state, before, "rendering must not mutate state");
    }
}
