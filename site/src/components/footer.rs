use leptos::prelude::*;

use super::{Icon, ICON_SPARKLES};
use crate::state::use_page;

/// Brand, tagline, links and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_page().config;
    let copyright = format!(
        "\u{a9} {} {}. All rights reserved.",
        config.copyright_year, config.brand
    );

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="brand-mark">
                        <Icon paths=ICON_SPARKLES class="icon-on-accent" />
                    </span>
                    <span class="footer-title">{config.brand}</span>
                </div>
                <p class="footer-tagline">{config.tagline}</p>
                <div class="footer-links">
                    <a href="#about" class="footer-link">"About"</a>
                    <a href="#tools" class="footer-link">"Tools"</a>
                    <a href="#contact" class="footer-link">"Contact"</a>
                    <a href="#" class="footer-link">"Privacy Policy"</a>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
