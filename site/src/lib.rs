//! # majorem-site
//!
//! Leptos components for the Majorem landing page.
//!
//! The same component tree serves two builds:
//!
//! - **CSR** - the `landing/` crate mounts [`App`] in the browser, where the
//!   demo modals and the contact form are live.
//! - **SSR** - [`render_page`] (feature `ssr`) renders a complete static
//!   document, optionally with a demo already open or a result already shown.
//!   The `majorem-render` binary (feature `cli`) writes it to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use majorem::{DemoId, PageSnapshot, SiteConfig};
//! use majorem::sentiment::RngSource;
//! use majorem_site::{render_page, PageState};
//!
//! let snapshot = PageSnapshot::open(DemoId::AddressCleaning);
//! let state = PageState::from_snapshot(&snapshot, RngSource::seeded(7));
//! let html = render_page(state, SiteConfig::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Address Cleaning Demo"));
//! ```
//!
//! ## Architecture
//!
//! - [`state`] - reactive page state shared through context
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ---
//!
//! Developed by The Majorem Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod state;
pub mod styles;

pub use components::{App, PageDocument};
pub use state::{use_page, PageContext, PageDemo, PageState};
pub use styles::SITE_CSS;

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use majorem::SiteConfig;

/// Render the landing page as a complete HTML document.
///
/// Signals are created under a throwaway reactive owner, so each call renders
/// from exactly the `state` it is given.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_page(state: PageState, config: SiteConfig) -> String {
    let html = Owner::new().with(|| {
        PageContext::new(state, config).provide();
        view! { <PageDocument /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use majorem::sentiment::{FixedSource, Sentiment};
    use majorem::{ContactField, DemoId, PageSnapshot};
    use pretty_assertions::assert_eq;

    fn render(snapshot: &PageSnapshot) -> String {
        render_with(snapshot, SiteConfig::default())
    }

    fn render_with(snapshot: &PageSnapshot, config: SiteConfig) -> String {
        let source = FixedSource::new(Sentiment::Positive, 93);
        render_page(PageState::from_snapshot(snapshot, source), config)
    }

    /// Opening tag of the button whose label is `label`.
    fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
        let end = html
            .find(&format!(">{label}"))
            .unwrap_or_else(|| panic!("no button labelled {label}"));
        let start = html[..end].rfind("<button").expect("button tag");
        &html[start..end]
    }

    #[test]
    fn renders_closed_page() {
        let html = render(&PageSnapshot::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Majorem - Data Tools for Growing Businesses</title>"));
        assert!(html.contains("Our Powerful Tools"));
        assert!(!html.contains("modal-backdrop\" data-demo"));
        assert!(!html.contains("Clean Address"));
        assert!(!html.contains("Analyze Sentiment"));
        assert!(!html.contains("data-role=\"acknowledgment\""));
    }

    #[test]
    fn renders_all_tool_cards() {
        let html = render(&PageSnapshot::default());

        assert_eq!(html.matches("class=\"tool-card reveal\"").count(), 9);
        assert_eq!(html.matches("class=\"tool-demo-btn\"").count(), 2);
        assert!(html.contains("data-demo=\"address-cleaning\""));
        assert!(html.contains("data-demo=\"sentiment-analysis\""));
        assert_eq!(html.matches("class=\"testimonial-card").count(), 3);
    }

    #[test]
    fn open_address_demo_shows_only_that_modal() {
        let html = render(&PageSnapshot::open(DemoId::AddressCleaning));

        assert!(html.contains("Address Cleaning Demo"));
        assert!(html.contains("Clean Address"));
        assert!(!html.contains("Analyze Sentiment"));
        assert!(!html.contains("Cleaned Address:"));
    }

    #[test]
    fn blank_address_disables_submit() {
        let html = render(&PageSnapshot::open(DemoId::AddressCleaning));
        assert!(button_tag(&html, "Clean Address").contains("disabled"));

        let typed = PageSnapshot {
            address_input: "1 main st".into(),
            ..PageSnapshot::open(DemoId::AddressCleaning)
        };
        let html = render(&typed);
        assert!(!button_tag(&html, "Clean Address").contains("disabled"));
    }

    #[test]
    fn submitted_address_shows_cleaned_result() {
        let snapshot = PageSnapshot {
            address_input: "  123 main st,   new york, ny 10001 usa  ".into(),
            submit: true,
            ..PageSnapshot::open(DemoId::AddressCleaning)
        };
        let html = render(&snapshot);

        assert!(html.contains("Cleaned Address:"));
        assert!(html.contains("123 Main St, New York, Ny 10001 Usa"));
    }

    #[test]
    fn blank_submit_shows_no_result() {
        let snapshot = PageSnapshot {
            address_input: "   ".into(),
            submit: true,
            ..PageSnapshot::open(DemoId::AddressCleaning)
        };
        let html = render(&snapshot);

        assert!(html.contains("Clean Address"));
        assert!(!html.contains("Cleaned Address:"));
    }

    #[test]
    fn submitted_sentiment_shows_reading() {
        let snapshot = PageSnapshot {
            sentiment_input: "Love the product".into(),
            submit: true,
            ..PageSnapshot::open(DemoId::SentimentAnalysis)
        };
        let html = render(&snapshot);

        assert!(html.contains("Sentiment Analysis Demo"));
        assert!(html.contains("Analysis Result:"));
        assert!(html.contains("sentiment-badge sentiment-positive"));
        assert!(html.contains(" with 93% confidence"));
        assert!(!html.contains("Clean Address"));
    }

    #[test]
    fn unsubmitted_sentiment_shows_no_reading() {
        let snapshot = PageSnapshot {
            sentiment_input: "Love the product".into(),
            ..PageSnapshot::open(DemoId::SentimentAnalysis)
        };
        let html = render(&snapshot);

        assert!(html.contains("Love the product"));
        assert!(!html.contains("Analysis Result:"));
        assert!(!html.contains("sentiment-badge sentiment-"));
    }

    #[test]
    fn contact_submit_shows_acknowledgment() {
        let mut snapshot = PageSnapshot {
            submit_contact: true,
            ..Default::default()
        };
        snapshot.contact.set(ContactField::Name, "Ada");
        snapshot.contact.set(ContactField::Company, "Analytical Engines");
        snapshot.contact.set(ContactField::Email, "ada@example.com");
        snapshot.contact.set(ContactField::Message, "Hello");
        let html = render(&snapshot);

        assert!(html.contains("data-role=\"acknowledgment\""));
        assert!(html.contains("Message sent"));
        // Draft cleared after submit.
        assert!(!html.contains("value=\"Ada\""));
    }

    #[test]
    fn incomplete_contact_submit_keeps_draft() {
        let mut snapshot = PageSnapshot {
            submit_contact: true,
            ..Default::default()
        };
        snapshot.contact.set(ContactField::Name, "Ada");
        let html = render(&snapshot);

        assert!(!html.contains("data-role=\"acknowledgment\""));
        assert!(html.contains("value=\"Ada\""));
    }

    #[test]
    fn config_overrides_branding() {
        let config = SiteConfig {
            brand: "Acme Data".into(),
            contact_email: "sales@acme.test".into(),
            copyright_year: 2031,
            ..Default::default()
        };
        let html = render_with(&PageSnapshot::default(), config);

        assert!(html.contains("<title>Acme Data - Data Tools for Growing Businesses</title>"));
        assert!(html.contains("mailto:sales@acme.test"));
        assert!(html.contains("2031 Acme Data. All rights reserved."));
    }
}
