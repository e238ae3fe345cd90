//! Root document component - the complete HTML page for static rendering.

use super::App;
use crate::state::use_page;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

const DESCRIPTION: &str = "AI-powered data tools for startups and small businesses: \
    fuzzy matching, address cleaning, sentiment analysis and more.";

/// `<html>` shell around [`App`], with the stylesheet inlined.
#[component]
pub fn PageDocument() -> impl IntoView {
    let title = format!("{} - Data Tools for Growing Businesses", use_page().config.brand);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=DESCRIPTION />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}
