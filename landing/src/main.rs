// Majorem landing page, client-side rendered.
// Build with `trunk build --release` from this directory.

mod keys;

use leptos::prelude::*;
use majorem::SiteConfig;
use majorem_site::{App, PageContext, PageState, SITE_CSS};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        let page = PageContext::new(PageState::default(), SiteConfig::default());
        keys::close_on_escape(page.clone());
        page.provide();

        view! {
            <style>{SITE_CSS}</style>
            <App />
        }
    });
}
