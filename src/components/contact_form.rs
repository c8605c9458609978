//! Contact form with a mock submit: no request leaves the page, the payload
//! is logged and the button flashes a confirmation before the fields clear.

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

/// Trims the three fields and builds the payload, or `None` when any field
/// is empty.
fn validated(name: &str, email: &str, message: &str) -> Option<ContactMessage> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return None;
    }
    Some(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sent = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sent = sent.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sent {
                return;
            }
            match validated(&name, &email, &message) {
                Some(payload) => {
                    log!(
                        "contact form submitted:",
                        serde_json::to_string(&payload).unwrap_or_default()
                    );
                    sent.set(true);

                    let name = name.clone();
                    let email = email.clone();
                    let message = message.clone();
                    let sent = sent.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::SENT_RESET_DELAY_MS).await;
                        sent.set(false);
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    });
                }
                None => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Please fill in all fields");
                    }
                }
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                placeholder="Your Name"
                value={(*name).clone()}
                oninput={let name = name.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                placeholder="Your Email"
                value={(*email).clone()}
                oninput={let email = email.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <textarea
                placeholder="Your Message"
                value={(*message).clone()}
                oninput={let message = message.clone(); move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            <button
                type="submit"
                class="submit-button"
                style={(*sent).then(|| "background: #10b981")}
            >
                { if *sent { "✓ Message Sent!" } else { "Send Message" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        assert!(validated("", "jane@x.com", "hello").is_none());
        assert!(validated("Jane", "", "hello").is_none());
        assert!(validated("Jane", "jane@x.com", "").is_none());
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        assert!(validated("   ", "jane@x.com", "hello").is_none());
        assert!(validated("Jane", "jane@x.com", "\n\t ").is_none());
    }

    #[test]
    fn payload_is_trimmed() {
        let payload = validated("  Jane ", " jane@x.com", "hello\n").unwrap();
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.email, "jane@x.com");
        assert_eq!(payload.message, "hello");
    }
}
