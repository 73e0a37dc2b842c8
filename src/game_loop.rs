//! Per-frame orchestration
//!
//! A [`Session`] owns the settings and the live [`GameState`]. The host calls
//! [`Session::frame`] once per display refresh; scheduling the next call is
//! the host's job (see `platform`).

use crate::input::{KeyAction, MoveIntent};
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameState, TickReport, tick};

/// Receives the end-of-game signal before the session is rebuilt.
///
/// Implementations may block (the browser host shows a modal alert).
pub trait GameOverNotifier {
    fn notify_game_over(&mut self, message: &str);
}

/// Notifier that only writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl GameOverNotifier for LogNotifier {
    fn notify_game_over(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub tick: TickReport,
    /// The session was rebuilt at the end of this frame
    pub reset: bool,
}

/// One play session, rebuilt from its settings after every game over
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    state: GameState,
    games_played: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(&settings);
        log::info!(
            "Session started: {}x{} surface, {} bricks",
            state.surface.x,
            state.surface.y,
            state.bricks.len()
        );
        Self {
            settings,
            state,
            games_played: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Number of games that ended in this session
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    pub fn intent_mut(&mut self) -> &mut MoveIntent {
        &mut self.state.paddle.intent
    }

    /// Forward a host key event to the paddle intent
    pub fn handle_key(&mut self, name: &str, action: KeyAction) -> bool {
        self.intent_mut().handle_key(name, action)
    }

    /// Draw the current state, then advance it by one tick.
    ///
    /// On game over the notifier runs and the whole state is rebuilt from the
    /// settings, intents included.
    pub fn frame<S, N>(&mut self, surface: &mut S, notifier: &mut N) -> FrameReport
    where
        S: Surface + ?Sized,
        N: GameOverNotifier + ?Sized,
    {
        render(&self.state, &self.settings.palette, surface);

        let report = tick(&mut self.state);
        let reset = report.is_game_over();
        if reset {
            log::info!(
                "Game over after {} frames with {} bricks left",
                self.state.frame,
                self.state.bricks.visible_count()
            );
            notifier.notify_game_over(&self.settings.game_over_message);
            self.reset();
        }

        FrameReport {
            tick: report,
            reset,
        }
    }

    /// Rebuild every entity from the settings
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.settings);
        self.games_played += 1;
        log::info!("Session reset (game {})", self.games_played + 1);
    }
}
