//! Wave parallax and section background drift, plus the pure scroll math the
//! nav highlighter shares.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config;

/// Vertical translation of the wave layers for a given scroll offset.
pub fn wave_offset(scroll_y: f64) -> f64 {
    scroll_y * config::WAVE_PARALLAX_FACTOR
}

/// Background-position shift for a section, or `None` when the section is
/// outside the viewport and should be left untouched. The shift runs from 0
/// as the section enters to [`config::BACKGROUND_DRIFT_RANGE`] at full
/// traversal.
pub fn section_drift(
    scroll_y: f64,
    viewport_height: f64,
    section_top: f64,
    section_height: f64,
) -> Option<f64> {
    let in_view =
        scroll_y + viewport_height > section_top && scroll_y < section_top + section_height;
    if !in_view {
        return None;
    }
    let progress = (scroll_y + viewport_height - section_top) / (section_height + viewport_height);
    Some(progress * config::BACKGROUND_DRIFT_RANGE)
}

/// Id of the section the page is currently scrolled to: the last one in
/// document order whose top sits at or above the scroll position plus the
/// highlight offset. `None` when the scroll position is above every section.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64) -> Option<String> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - config::SCROLL_HIGHLIGHT_OFFSET {
            current = Some(id.clone());
        }
    }
    current
}

fn elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(selector) else {
        return out;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            out.push(el);
        }
    }
    out
}

fn shift_backgrounds(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    for section in elements(&document, ".page") {
        let top = section.offset_top() as f64;
        let height = section.client_height() as f64;
        if let Some(shift) = section_drift(scroll_y, viewport, top, height) {
            let _ = section
                .style()
                .set_property("background-position", &format!("0 {shift}px"));
        }
    }
}

/// Attaches both scroll handlers: the frame-throttled wave translation and
/// the per-event background drift.
pub fn install() -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| {});
    };

    let last_scroll = Rc::new(Cell::new(0.0f64));

    let update_waves = {
        let window = window.clone();
        let last_scroll = last_scroll.clone();
        super::frame_throttled(move || {
            let Some(document) = window.document() else {
                return;
            };
            let offset = wave_offset(last_scroll.get());
            for wave in elements(&document, ".wave") {
                let _ = wave
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        })
    };

    let on_scroll_waves = {
        let window = window.clone();
        let mut update_waves = update_waves;
        Closure::wrap(Box::new(move || {
            last_scroll.set(window.page_y_offset().unwrap_or(0.0));
            update_waves();
        }) as Box<dyn FnMut()>)
    };

    let on_scroll_drift = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            shift_backgrounds(&window);
        }) as Box<dyn FnMut()>)
    };

    let _ = window
        .add_event_listener_with_callback("scroll", on_scroll_waves.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("scroll", on_scroll_drift.as_ref().unchecked_ref());

    Box::new(move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", on_scroll_waves.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("scroll", on_scroll_drift.as_ref().unchecked_ref());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(specs: &[(&str, f64)]) -> Vec<(String, f64)> {
        specs.iter().map(|(id, top)| (id.to_string(), *top)).collect()
    }

    #[test]
    fn wave_offset_is_linear_in_scroll() {
        assert_eq!(wave_offset(0.0), 0.0);
        assert_eq!(wave_offset(100.0), 30.0);
        assert_eq!(wave_offset(1000.0), 300.0);
    }

    #[test]
    fn no_section_active_above_the_first() {
        let s = sections(&[("about", 800.0), ("team", 1600.0)]);
        assert_eq!(active_section(&s, 0.0), None);
        assert_eq!(active_section(&s, 599.0), None);
    }

    #[test]
    fn highlight_threshold_is_inclusive() {
        let s = sections(&[("about", 800.0)]);
        assert_eq!(active_section(&s, 600.0), Some("about".into()));
    }

    #[test]
    fn later_section_overrides_earlier_matches() {
        let s = sections(&[("home", 0.0), ("about", 800.0), ("team", 1600.0)]);
        assert_eq!(active_section(&s, 0.0), Some("home".into()));
        assert_eq!(active_section(&s, 700.0), Some("about".into()));
        assert_eq!(active_section(&s, 2000.0), Some("team".into()));
    }

    #[test]
    fn offscreen_sections_get_no_drift() {
        // Section fully below the viewport.
        assert_eq!(section_drift(0.0, 800.0, 1000.0, 500.0), None);
        // Section fully above the viewport.
        assert_eq!(section_drift(1500.0, 800.0, 0.0, 500.0), None);
    }

    #[test]
    fn drift_grows_from_entry_to_exit() {
        let (vh, top, height) = (800.0, 1000.0, 500.0);
        let early = section_drift(201.0, vh, top, height).unwrap();
        let mid = section_drift(600.0, vh, top, height).unwrap();
        let late = section_drift(top + height - 1.0, vh, top, height).unwrap();
        assert!(early < mid && mid < late);
        assert!(early < 1.0);
        assert!(late > 49.0 && late <= 50.0);
    }
}
