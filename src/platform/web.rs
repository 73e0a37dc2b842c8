//! Browser host
//!
//! Owns the canvas, keyboard listeners and the `requestAnimationFrame` chain.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use super::with_idle;
use crate::game_loop::{GameOverNotifier, Session};
use crate::input::KeyAction;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;

/// Id of the canvas element the game draws into
pub const CANVAS_ID: &str = "gameCanvas";

/// Blocking `window.alert`
struct AlertNotifier {
    window: Window,
}

impl GameOverNotifier for AlertNotifier {
    fn notify_game_over(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Everything the frame callback needs
struct Game {
    session: Session,
    surface: CanvasSurface,
    notifier: AlertNotifier,
}

/// Set up the session on the page canvas and start the frame loop
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into()?;

    let settings = Settings::load(&canvas);
    let game = Rc::new(RefCell::new(Game {
        session: Session::new(settings),
        surface: CanvasSurface::new(&canvas)?,
        notifier: AlertNotifier {
            window: window.clone(),
        },
    }));

    setup_input_handlers(&document, game.clone())?;
    request_animation_frame(&window, game)?;

    log::info!("Breakout running!");
    Ok(())
}

fn setup_input_handlers(
    document: &web_sys::Document,
    game: Rc<RefCell<Game>>,
) -> Result<(), JsValue> {
    for (kind, action) in [("keydown", KeyAction::Down), ("keyup", KeyAction::Up)] {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            // The reset after game over clears intents anyway
            if with_idle(&*game, |g| g.session.handle_key(&key, action)).is_none() {
                log::debug!("Dropped {} during frame", key);
            }
        });
        document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn request_animation_frame(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let closure = Closure::once(move |_time: f64| game_loop(game));
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(game: Rc<RefCell<Game>>) {
    {
        let mut g = game.borrow_mut();
        let Game {
            session,
            surface,
            notifier,
        } = &mut *g;
        session.frame(surface, notifier);
    }

    let scheduled = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| request_animation_frame(&window, game));
    if let Err(e) = scheduled {
        log::error!("Could not schedule next frame: {:?}", e);
    }
}
