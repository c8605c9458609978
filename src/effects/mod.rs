//! Scroll- and pointer-driven style effects wired directly onto the DOM.
//!
//! Each submodule exposes an `install` function that attaches its listeners
//! and hands back a cleanup closure for the caller's effect teardown. Missing
//! elements are tolerated: an effect that finds nothing to drive simply does
//! not activate.

pub mod glow;
pub mod reveal;
pub mod scroll;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Wraps `work` so it runs at most once per rendered frame however many raw
/// events fire in between. The guard flag is reset inside the frame callback,
/// so a burst of events schedules exactly one recomputation.
pub fn frame_throttled(mut work: impl FnMut() + 'static) -> impl FnMut() {
    let scheduled = Rc::new(Cell::new(false));
    let frame = {
        let scheduled = scheduled.clone();
        Closure::wrap(Box::new(move || {
            scheduled.set(false);
            work();
        }) as Box<dyn FnMut()>)
    };
    move || {
        if scheduled.get() {
            return;
        }
        scheduled.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
        }
    }
}
