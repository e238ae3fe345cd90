//! Keyboard shortcuts.

use leptos::prelude::*;
use majorem_site::PageContext;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Escape closes the open demo, or the contact acknowledgment if no demo is open.
pub fn close_on_escape(page: PageContext) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if event.key() != "Escape" {
            return;
        }
        if page.demo.with_untracked(|d| d.active().is_some()) {
            page.demo.update(|d| d.close_demo());
        } else if page.contact.with_untracked(|c| c.acknowledgment().is_some()) {
            page.contact.update(|c| c.dismiss_acknowledgment());
        }
    }) as Box<dyn FnMut(_)>);

    if document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"Escape shortcut unavailable".into());
    }

    // Lives as long as the page
    closure.forget();
}
