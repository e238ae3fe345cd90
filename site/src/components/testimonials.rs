use leptos::prelude::*;
use majorem::catalog::{Testimonial, TESTIMONIALS};

use super::{Icon, ICON_STAR};

/// Grid of customer quotes.
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section section-muted">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Trusted by Growing Businesses"</h2>
                    <p class="section-description">"Don't just take our word for it"</p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| view! {
                            <TestimonialCard testimonial=testimonial index=index />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}ms", index * 200);
    let quote = format!("\u{201c}{}\u{201d}", testimonial.content);
    let byline = format!("{}, {}", testimonial.role, testimonial.company);

    view! {
        <figure class="testimonial-card reveal" style=delay>
            <div class="testimonial-stars" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {(0..testimonial.rating)
                    .map(|_| view! { <Icon paths=ICON_STAR fill="currentColor" class="icon-star" /> })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption>
                <p class="testimonial-name">{testimonial.name}</p>
                <p class="testimonial-role">{byline}</p>
            </figcaption>
        </figure>
    }
}
