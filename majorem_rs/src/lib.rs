//! # majorem
//!
//! State and demo logic behind the Majorem landing page.
//!
//! The page itself is static marketing copy. What lives here is the small
//! amount of behavior it has:
//!
//! - [`address`] - comma-split, capitalize-each-word address formatter
//! - [`sentiment`] - coin-flip sentiment placeholder with an injectable source
//! - [`demo`] - which demo modal is open, its input and its result
//! - [`contact`] - contact form draft and local acknowledgment
//! - [`catalog`] - tool cards and testimonials
//! - [`config`] - optional `majorem.toml` with branding and contact details
//! - [`snapshot`] - replayable preview states for the static renderer
//!
//! Nothing here does I/O besides reading the config file, and nothing can
//! fail once its input is accepted. Blank submissions are ignored, not
//! reported.
//!
//! ```rust
//! use majorem::demo::{DemoController, DemoId};
//! use majorem::sentiment::{FixedSource, Sentiment};
//!
//! let mut demo = DemoController::with_source(FixedSource::new(Sentiment::Positive, 90));
//! demo.open_demo(DemoId::AddressCleaning);
//! demo.set_address_text("123 main st, new york");
//! assert!(demo.submit_address_demo());
//! assert_eq!(demo.address_result().as_deref(), Some("123 Main St, New York"));
//!
//! demo.close_demo();
//! assert_eq!(demo.active(), None);
//! ```
//!
//! ---
//!
//! Developed by The Majorem Team (c)2025

pub mod address;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod demo;
pub mod error;
pub mod sentiment;
pub mod snapshot;

pub use config::SiteConfig;
pub use contact::{Acknowledgment, ContactField, ContactFormController, ContactFormDraft};
pub use demo::{DemoController, DemoId, DemoSession};
pub use error::{MajoremError, Result};
pub use sentiment::{Sentiment, SentimentReading, SentimentSource};
pub use snapshot::PageSnapshot;
