//! Page-scoped reactive state.
//!
//! The page owns one [`DemoController`] and one [`ContactFormController`],
//! each wrapped in a signal. Components reach them through [`PageContext`],
//! provided once at the root of the tree.

use leptos::prelude::*;
use majorem::sentiment::{BoxedSource, RngSource, SentimentSource};
use majorem::{ContactFormController, DemoController, PageSnapshot, SiteConfig};

/// Demo controller type used by the page.
pub type PageDemo = DemoController<BoxedSource>;

/// Plain, non-reactive page state. Turned into signals by [`PageContext::new`].
pub struct PageState {
    /// Demo modals
    pub demo: PageDemo,
    /// Contact form
    pub contact: ContactFormController,
}

impl PageState {
    /// Fresh state with the given randomness for the sentiment demo.
    pub fn with_source(source: impl SentimentSource + Send + Sync + 'static) -> Self {
        Self {
            demo: DemoController::with_source(Box::new(source)),
            contact: ContactFormController::new(),
        }
    }

    /// State reached by replaying `snapshot` from a fresh page.
    pub fn from_snapshot(
        snapshot: &PageSnapshot,
        source: impl SentimentSource + Send + Sync + 'static,
    ) -> Self {
        let mut state = Self::with_source(source);
        snapshot.replay(&mut state.demo, &mut state.contact);
        state
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::with_source(RngSource::from_entropy())
    }
}

/// Context shared by every section of the page.
#[derive(Clone)]
pub struct PageContext {
    /// Demo controller signal
    pub demo: RwSignal<PageDemo>,
    /// Contact form controller signal
    pub contact: RwSignal<ContactFormController>,
    /// Branding and contact details, fixed for the page's lifetime
    pub config: SiteConfig,
}

impl PageContext {
    /// Must run inside a reactive owner.
    pub fn new(state: PageState, config: SiteConfig) -> Self {
        Self {
            demo: RwSignal::new(state.demo),
            contact: RwSignal::new(state.contact),
            config,
        }
    }

    /// Make this context visible to every component below the current owner.
    pub fn provide(self) {
        provide_context(self);
    }
}

/// The page context. Panics outside a tree set up by [`PageContext::provide`].
pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
