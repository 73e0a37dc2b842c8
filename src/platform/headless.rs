//! Headless frame driver
//!
//! Runs frames back to back without a display. Used by the native binary.

use crate::game_loop::{GameOverNotifier, Session};
use crate::renderer::Surface;

/// Totals over a headless run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub bricks_broken: u64,
    pub games_over: u64,
}

/// Run `frames` frames on the given surface
pub fn run<S, N>(
    session: &mut Session,
    frames: u64,
    surface: &mut S,
    notifier: &mut N,
) -> RunSummary
where
    S: Surface + ?Sized,
    N: GameOverNotifier + ?Sized,
{
    let mut summary = RunSummary::default();
    for _ in 0..frames {
        let report = session.frame(surface, notifier);
        summary.frames += 1;
        summary.bricks_broken += report.tick.broken_bricks().count() as u64;
        if report.reset {
            summary.games_over += 1;
        }
    }
    summary
}
