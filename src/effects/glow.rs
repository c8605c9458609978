//! Pointer-proximity glow on the call-to-action buttons.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config;

/// Glow blur for a pointer offset relative to a button's top-left corner
/// (measured from the corner, not the center), or `None` beyond the glow
/// radius.
pub fn glow_blur(dx: f64, dy: f64) -> Option<f64> {
    let distance = (dx * dx + dy * dy).sqrt();
    (distance < config::GLOW_RADIUS).then(|| config::GLOW_BASE_BLUR + distance)
}

fn apply_glow(x: f64, y: f64) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(buttons) = document.query_selector_all(".cta-button, .submit-button") else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let rect = button.get_bounding_client_rect();
        let style = button.style();
        match glow_blur(x - rect.left(), y - rect.top()) {
            Some(blur) => {
                let _ = style.set_property(
                    "box-shadow",
                    &format!("0 0 {blur}px rgba(0, 212, 255, 0.4)"),
                );
            }
            None => {
                let _ = style.remove_property("box-shadow");
            }
        }
    }
}

/// Attaches the frame-throttled `mousemove` handler.
pub fn install() -> Box<dyn FnOnce()> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Box::new(|| {});
    };

    let pointer = Rc::new(Cell::new((0.0f64, 0.0f64)));

    let update = {
        let pointer = pointer.clone();
        super::frame_throttled(move || {
            let (x, y) = pointer.get();
            apply_glow(x, y);
        })
    };

    let on_mousemove = {
        let mut update = update;
        Closure::wrap(Box::new(move |e: MouseEvent| {
            pointer.set((e.client_x() as f64, e.client_y() as f64));
            update();
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let _ = document
        .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());

    Box::new(move || {
        let _ = document
            .remove_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_at_the_corner_is_the_base_constant() {
        assert_eq!(glow_blur(0.0, 0.0), Some(20.0));
    }

    #[test]
    fn blur_grows_linearly_with_distance() {
        // 3-4-5 triangle: distance 50.
        assert_eq!(glow_blur(30.0, 40.0), Some(70.0));
        assert_eq!(glow_blur(-30.0, 40.0), Some(70.0));
    }

    #[test]
    fn no_glow_at_or_beyond_the_radius() {
        assert_eq!(glow_blur(150.0, 0.0), None);
        assert_eq!(glow_blur(90.0, 120.0), None);
        assert_eq!(glow_blur(500.0, 500.0), None);
    }
}
