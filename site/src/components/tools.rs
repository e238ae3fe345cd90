//! "Our Powerful Tools" grid.

use leptos::prelude::*;
use majorem::catalog::{Tool, TOOLS};

use super::{tool_icon, Icon, ICON_SPARKLES};
use crate::state::use_page;

/// Delay between card entrance animations.
const CARD_STAGGER_MS: usize = 100;

/// Card grid for every tool in the catalog.
#[component]
pub fn ToolCatalog() -> impl IntoView {
    view! {
        <section id="tools" class="section section-light">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Powerful Tools"</h2>
                    <p class="section-description">
                        "Everything you need to clean, analyze, and leverage your business data effectively"
                    </p>
                </div>
                <div class="tools-grid">
                    {TOOLS
                        .iter()
                        .enumerate()
                        .map(|(index, tool)| view! { <ToolCard tool=tool index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ToolCard(tool: &'static Tool, index: usize) -> impl IntoView {
    let demo = use_page().demo;
    let delay = format!("animation-delay: {}ms", index * CARD_STAGGER_MS);

    view! {
        <article
            id=tool.slug()
            class="tool-card reveal"
            style=delay
            data-category=tool.category.slug()
        >
            <div class="tool-card-header">
                <div class="tool-icon">
                    <Icon paths=tool_icon(tool.icon) size="24" class="icon-accent" />
                </div>
                <h3 class="tool-title">{tool.title}</h3>
            </div>
            <p class="tool-description">{tool.description}</p>
            {tool.demo.map(|id| view! {
                <button
                    class="tool-demo-btn"
                    data-demo=id.slug()
                    on:click=move |_| demo.update(|d| d.open_demo(id))
                >
                    "Try Demo"
                    <Icon paths=ICON_SPARKLES size="16" />
                </button>
            })}
        </article>
    }
}
