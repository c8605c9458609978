//! Fixed top navigation: hamburger menu, smooth in-page anchor scrolling and
//! the scroll-position section highlighter. At most one link is active at a
//! time; the active id comes either from a click or from the throttled scroll
//! recomputation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::effects;
use crate::effects::scroll;

/// Section id and link label; the sections themselves are rendered by the
/// landing page.
const NAV_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("team", "Team"),
    ("contact", "Contact"),
];

/// Smoothly scrolls to the section with `id`. Returns whether the target
/// exists; a missing target is a no-op.
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn section_offsets(document: &Document) -> Vec<(String, f64)> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(".page") else {
        return out;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let id = el.id();
        if id.is_empty() {
            continue;
        }
        out.push((id, el.offset_top() as f64));
    }
    out
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let recompute = {
                    let window = window.clone();
                    effects::frame_throttled(move || {
                        let Some(document) = window.document() else {
                            return;
                        };
                        let scroll_y = window.page_y_offset().unwrap_or(0.0);
                        active.set(scroll::active_section(&section_offsets(&document), scroll_y));
                    })
                };

                let on_scroll = {
                    let mut recompute = recompute;
                    Closure::wrap(Box::new(move || recompute()) as Box<dyn FnMut()>)
                };
                let _ = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class="top-nav">
            <span class="nav-logo">{"Portfolio"}</span>
            <button class={classes!("hamburger", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                {
                    for NAV_SECTIONS.iter().map(|(id, label)| {
                        let onclick = {
                            let active = active.clone();
                            let menu_open = menu_open.clone();
                            let id = *id;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if smooth_scroll_to(id) {
                                    active.set(Some(id.to_string()));
                                }
                                // Any link click closes the mobile menu.
                                menu_open.set(false);
                            })
                        };
                        let class = classes!(
                            "nav-link",
                            ((*active).as_deref() == Some(*id)).then(|| "active")
                        );
                        html! {
                            <a href={format!("#{id}")} {class} {onclick}>{ *label }</a>
                        }
                    })
                }
            </div>
        </nav>
    }
}
