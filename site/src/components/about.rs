use leptos::prelude::*;

use super::{Icon, ICON_CHECK_CIRCLE};
use crate::state::use_page;

const HIGHLIGHTS: [&str; 3] = [
    "Built specifically for SMBs",
    "Privacy-first approach",
    "Seamless integrations",
];

const REASONS: [(&str, &str); 3] = [
    ("Data Privacy", "Your data never leaves our secure environment"),
    ("Quick Implementation", "Go live in hours, not months"),
    ("Expert Support", "Real humans, real fast responses"),
];

/// Company story, highlights and the "why choose" panel.
#[component]
pub fn About() -> impl IntoView {
    let config = use_page().config;
    let heading = format!("About {}", config.brand);
    let why = format!("Why Choose {}?", config.brand);
    let mission = format!(
        "Founded in {}, our mission is to democratize access to enterprise-grade data tools by providing \
         affordable, easy-to-use SaaS solutions that deliver immediate ROI without the complexity.",
        config.founded_year
    );

    view! {
        <section id="about" class="section">
            <div class="container about-grid">
                <div class="reveal-left">
                    <h2 class="section-title">{heading}</h2>
                    <p class="about-text">
                        "We're a team of data scientists, engineers, and marketing professionals who understand the unique challenges "
                        "faced by startups and small businesses when it comes to data management and analysis."
                    </p>
                    <p class="about-text">{mission}</p>
                    <ul class="about-highlights">
                        {HIGHLIGHTS
                            .into_iter()
                            .map(|item| view! {
                                <li class="about-highlight">
                                    <Icon paths=ICON_CHECK_CIRCLE size="24" class="icon-success" />
                                    <span>{item}</span>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="about-panel reveal-right">
                    <h3 class="about-panel-title">{why}</h3>
                    <p>
                        "Unlike bloated enterprise solutions, our tools are laser-focused on solving the most common "
                        "data challenges faced by growing businesses."
                    </p>
                    <div class="about-reasons">
                        {REASONS
                            .into_iter()
                            .map(|(title, body)| view! {
                                <div>
                                    <h4 class="about-reason-title">{title}</h4>
                                    <p class="about-reason-body">{body}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
