use leptos::prelude::*;

use super::{About, Contact, DemoModals, Footer, Hero, Nav, Testimonials, ToolCatalog};

/// The whole page body. Expects a [`PageContext`](crate::PageContext) to be
/// provided by the caller.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <ToolCatalog />
                <About />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
            <DemoModals />
        </div>
    }
}
