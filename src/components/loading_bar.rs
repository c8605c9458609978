//! Fake-progress loading overlay shown until the page's load event fires.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

/// Next fake progress value. Increments only apply below the hold ceiling,
/// so the bar stalls there until the load event snaps it to 100.
fn step(progress: f64, increment: f64) -> f64 {
    if progress < config::LOADING_HOLD_BELOW {
        progress + increment.max(0.0)
    } else {
        progress
    }
}

#[function_component(LoadingBar)]
pub fn loading_bar() -> Html {
    let progress = use_state_eq(|| 0.0f64);
    let done = use_state_eq(|| false);

    {
        let progress = progress.clone();
        let done = done.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                // The state handles captured below are per-render snapshots,
                // so the authoritative progress value lives in this cell.
                let value = Rc::new(Cell::new(0.0f64));

                let interval = {
                    let value = value.clone();
                    let progress = progress.clone();
                    Interval::new(config::LOADING_TICK_MS, move || {
                        let next =
                            step(value.get(), Math::random() * config::LOADING_MAX_INCREMENT);
                        value.set(next);
                        progress.set(next);
                    })
                };
                let interval = Rc::new(RefCell::new(Some(interval)));

                let finish = {
                    let interval = interval.clone();
                    move || {
                        drop(interval.borrow_mut().take());
                        value.set(100.0);
                        progress.set(100.0);
                        let done = done.clone();
                        Timeout::new(config::LOADING_FADE_DELAY_MS, move || done.set(true))
                            .forget();
                    }
                };

                // The load event can already be behind us by the time the
                // WASM module has booted and this component mounts.
                if document.ready_state() == "complete" {
                    finish();
                    return Box::new(|| {}) as Box<dyn FnOnce()>;
                }

                let on_load = {
                    let finish = finish.clone();
                    Closure::wrap(Box::new(move || finish()) as Box<dyn FnMut()>)
                };
                let _ = window
                    .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "load",
                        on_load.as_ref().unchecked_ref(),
                    );
                    drop(interval.borrow_mut().take());
                }) as Box<dyn FnOnce()>
            },
            (),
        );
    }

    let width = (*progress).min(100.0);
    html! {
        <div class={classes!("loading-container", (*done).then(|| "loaded"))}>
            <div class="loading-bar" style={format!("width: {width}%")}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotone() {
        let mut p = 0.0;
        for inc in [10.0, 0.0, 35.5, 40.0, 40.0] {
            let next = step(p, inc);
            assert!(next >= p);
            p = next;
        }
    }

    #[test]
    fn progress_stalls_once_past_the_ceiling() {
        // One increment may carry it past 90, after which it holds.
        let p = step(85.0, 40.0);
        assert_eq!(p, 125.0);
        assert_eq!(step(p, 40.0), p);
        assert_eq!(step(90.0, 40.0), 90.0);
    }

    #[test]
    fn increments_below_the_ceiling_apply_in_full() {
        assert_eq!(step(0.0, 40.0), 40.0);
        assert_eq!(step(50.0, 25.5), 75.5);
    }
}
