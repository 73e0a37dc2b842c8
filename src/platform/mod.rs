//! Platform abstraction layer
//!
//! Decides when [`Session::frame`](crate::Session::frame) runs:
//! - `web`: once per `requestAnimationFrame`, with keyboard listeners
//! - `headless`: a fixed number of frames back to back

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::RefCell;

/// Run `f` on the shared value unless it is already borrowed.
///
/// Host callbacks can fire while a frame still holds the borrow (a blocking
/// alert during game over); those calls are skipped instead of panicking.
pub fn with_idle<T, R>(shared: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    let mut value = shared.try_borrow_mut().ok()?;
    Some(f(&mut value))
}
