//! Leptos UI components for the landing page.
//!
//! Every component reads page state through [`crate::state::use_page`], so
//! the tree renders the same way in the browser (CSR) and in the static
//! renderer (SSR).
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (SSR only)
//! └── App
//!     ├── Nav
//!     ├── Hero
//!     ├── ToolCatalog
//!     │   └── ToolCard (x9, "Try Demo" on two)
//!     ├── About
//!     ├── Testimonials
//!     │   └── TestimonialCard (x3)
//!     ├── Contact
//!     │   ├── ContactForm
//!     │   │   └── FormField (x4)
//!     │   └── AcknowledgmentModal
//!     ├── Footer
//!     └── DemoModals
//!         ├── AddressDemoModal
//!         └── SentimentDemoModal
//! ```

mod about;
mod app;
mod contact;
mod demos;
mod document;
mod footer;
mod hero;
mod icons;
mod nav;
mod testimonials;
mod tools;

pub use about::About;
pub use app::App;
pub use contact::Contact;
pub use demos::DemoModals;
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use nav::Nav;
pub use testimonials::Testimonials;
pub use tools::ToolCatalog;
