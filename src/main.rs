//! Canvas Breakout entry point
//!
//! The browser build starts the canvas game; the native build plays a
//! headless session with no input and logs the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Breakout starting...");
    canvas_breakout::platform::web::start()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_breakout::game_loop::LogNotifier;
    use canvas_breakout::platform::headless;
    use canvas_breakout::renderer::NullSurface;
    use canvas_breakout::{Session, Settings};

    /// About ten seconds at 60 Hz
    const HEADLESS_FRAMES: u64 = 600;

    env_logger::init();
    log::info!("Breakout (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut session = Session::new(Settings::default());
    let summary = headless::run(
        &mut session,
        HEADLESS_FRAMES,
        &mut NullSurface,
        &mut LogNotifier,
    );
    log::info!(
        "Ran {} frames: {} bricks broken, {} games over",
        summary.frames,
        summary.bricks_broken,
        summary.games_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
