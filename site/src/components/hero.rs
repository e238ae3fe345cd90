use leptos::prelude::*;

/// Headline and the two calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title reveal">
                    "Transform Your Data Into"
                    <span class="hero-title-accent">"Actionable Insights"</span>
                </h1>
                <p class="hero-description reveal" style="animation-delay: 200ms">
                    "AI-powered marketing tools designed specifically for startups and small businesses. "
                    "Clean your data, understand your customers, and optimize your operations."
                </p>
                <div class="hero-actions reveal" style="animation-delay: 400ms">
                    <a href="#tools" class="btn btn-primary">"Try Free Demos"</a>
                    <a href="#contact" class="btn btn-outline">"Schedule Demo"</a>
                </div>
            </div>
        </section>
    }
}
