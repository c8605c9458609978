//! Fade-and-slide reveal for cards as they scroll into view.
//!
//! Every matched element starts hidden and is revealed the first time it
//! crosses the visibility threshold. The transition is one-way: nothing ever
//! re-hides a revealed element.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

/// Hides the reveal targets and starts observing them.
pub fn install() -> Box<dyn FnOnce()> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Box::new(|| {});
    };

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(el) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                let style = el.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return Box::new(|| {});
    };

    if let Ok(targets) = document.query_selector_all(".about-card, .team-member") {
        for i in 0..targets.length() {
            let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let style = el.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
            observer.observe(&el);
        }
    }

    Box::new(move || {
        observer.disconnect();
        drop(on_intersect);
    })
}
