//! Demo modals for the address cleaning and sentiment analysis cards.
//!
//! Visibility, input and results all come from the page's
//! [`DemoController`](majorem::DemoController). The submit buttons are
//! disabled while the input is blank, so a blank submission never reaches
//! the controller (which would ignore it anyway).

use leptos::prelude::*;
use majorem::address::{display_or_placeholder, ADDRESS_EXAMPLE};
use majorem::DemoId;

use super::{Icon, ICON_X};
use crate::state::use_page;

const SENTIMENT_PLACEHOLDER: &str = "Enter customer feedback, reviews, or survey responses...";

/// Both demo modals; at most one is shown.
#[component]
pub fn DemoModals() -> impl IntoView {
    let demo = use_page().demo;

    view! {
        <Show when=move || demo.with(|d| d.is_open(DemoId::AddressCleaning))>
            <AddressDemoModal />
        </Show>
        <Show when=move || demo.with(|d| d.is_open(DemoId::SentimentAnalysis))>
            <SentimentDemoModal />
        </Show>
    }
}

/// Backdrop, card and header shared by both modals.
#[component]
fn DemoModalFrame(demo_id: DemoId, intro: &'static str, children: Children) -> impl IntoView {
    let demo = use_page().demo;
    let title_id = format!("{}-title", demo_id.slug());

    view! {
        <div class="modal-backdrop" data-demo=demo_id.slug()>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby=title_id.clone()>
                <div class="modal-header">
                    <h3 id=title_id.clone() class="modal-title">{demo_id.title()}</h3>
                    <button
                        class="modal-close"
                        aria-label="Close demo"
                        on:click=move |_| demo.update(|d| d.close_demo())
                    >
                        <Icon paths=ICON_X />
                    </button>
                </div>
                <p class="modal-intro">{intro}</p>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn AddressDemoModal() -> impl IntoView {
    let demo = use_page().demo;
    let initial_text = demo.with_untracked(|d| d.address_text().to_string());

    view! {
        <DemoModalFrame
            demo_id=DemoId::AddressCleaning
            intro="Enter a messy address, and see how our system cleans and standardizes it."
        >
            <textarea
                class="demo-input demo-input-short mono"
                placeholder=ADDRESS_EXAMPLE
                prop:value=move || demo.with(|d| d.address_text().to_string())
                on:input=move |ev| demo.update(|d| d.set_address_text(event_target_value(&ev)))
            >
                {initial_text}
            </textarea>
            <button
                class="btn btn-primary btn-small"
                disabled=move || !demo.with(|d| d.can_submit_address())
                on:click=move |_| {
                    demo.update(|d| {
                        d.submit_address_demo();
                    })
                }
            >
                "Clean Address"
            </button>
            {move || demo.with(|d| d.address_result()).map(|cleaned| view! {
                <div class="demo-result">
                    <h4 class="demo-result-title">"Cleaned Address:"</h4>
                    <div class="demo-result-box mono">
                        {display_or_placeholder(&cleaned).to_string()}
                    </div>
                    <p class="demo-result-note">
                        "✅ Standardized format • ✅ Proper capitalization • ✅ Validated structure"
                    </p>
                </div>
            })}
        </DemoModalFrame>
    }
}

#[component]
fn SentimentDemoModal() -> impl IntoView {
    let demo = use_page().demo;
    let initial_text = demo.with_untracked(|d| d.sentiment_text().to_string());
    let reading = move || demo.with(|d| d.sentiment_result());

    view! {
        <DemoModalFrame
            demo_id=DemoId::SentimentAnalysis
            intro="Enter some text to analyze the sentiment. See how our AI understands customer emotions."
        >
            <textarea
                class="demo-input"
                placeholder=SENTIMENT_PLACEHOLDER
                prop:value=move || demo.with(|d| d.sentiment_text().to_string())
                on:input=move |ev| demo.update(|d| d.set_sentiment_text(event_target_value(&ev)))
            >
                {initial_text}
            </textarea>
            <div class="demo-actions">
                <button
                    class="btn btn-primary btn-small"
                    disabled=move || !demo.with(|d| d.can_submit_sentiment())
                    on:click=move |_| {
                        demo.update(|d| {
                            d.submit_sentiment_demo();
                        })
                    }
                >
                    "Analyze Sentiment"
                </button>
                {move || reading().map(|r| view! {
                    <div class=format!("sentiment-badge sentiment-{}", r.sentiment.label())>
                        {r.sentiment.badge()}
                    </div>
                })}
            </div>
            {move || reading().map(|r| view! {
                <div class="demo-result">
                    <h4 class="demo-result-title">"Analysis Result:"</h4>
                    <p class="demo-result-text">
                        "Our AI detected a "
                        <span class=format!("sentiment-word sentiment-{}", r.sentiment.label())>
                            {r.sentiment.label()}
                        </span>
                        " sentiment"
                        {r.confidence.map(|c| format!(" with {c}% confidence"))}
                        "."
                    </p>
                </div>
            })}
        </DemoModalFrame>
    }
}
