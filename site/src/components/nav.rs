use leptos::prelude::*;

use super::{Icon, ICON_SPARKLES};
use crate::state::use_page;

/// Sticky top bar with the brand and section links.
#[component]
pub fn Nav() -> impl IntoView {
    let brand = use_page().config.brand;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <span class="brand-mark">
                        <Icon paths=ICON_SPARKLES class="icon-on-accent" />
                    </span>
                    <span class="nav-title">{brand}</span>
                </a>
                <div class="nav-links">
                    <a href="#tools" class="nav-link">"Our Tools"</a>
                    <a href="#about" class="nav-link">"About Us"</a>
                    <a href="#testimonials" class="nav-link">"Testimonials"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </div>
            </div>
        </nav>
    }
}
