//! Demo controller: which demo modal is open and what the user typed into it.
//!
//! Each demo moves through `Closed -> Open(empty) -> Open(submitted)`.
//! [`DemoController::open_demo`] is the only way in and
//! [`DemoController::close_demo`] the only way out; closing clears both demos.
//! Opening one demo while the other is open only swaps the active id, the
//! other demo's text and result flag are left as they were until the next
//! close.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::clean_address;
use crate::error::MajoremError;
use crate::sentiment::{
    guess_sentiment, BoxedSource, RngSource, SentimentReading, SentimentSource,
};

/// Identifier of an interactive demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoId {
    AddressCleaning,
    SentimentAnalysis,
}

impl DemoId {
    pub const ALL: [DemoId; 2] = [DemoId::AddressCleaning, DemoId::SentimentAnalysis];

    /// Stable slug, the hyphenated lowercase title of the tool it demos.
    pub fn slug(self) -> &'static str {
        match self {
            DemoId::AddressCleaning => "address-cleaning",
            DemoId::SentimentAnalysis => "sentiment-analysis",
        }
    }

    /// Modal heading.
    pub fn title(self) -> &'static str {
        match self {
            DemoId::AddressCleaning => "Address Cleaning Demo",
            DemoId::SentimentAnalysis => "Sentiment Analysis Demo",
        }
    }
}

impl fmt::Display for DemoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DemoId {
    type Err = MajoremError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoId::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| MajoremError::UnknownDemo(s.to_string()))
    }
}

/// Session-local state behind the demo modals.
///
/// Fields are read through accessors; only [`DemoController`] mutates them,
/// which keeps "result visible implies non-empty input at submission" true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoSession {
    active: Option<DemoId>,
    address_text: String,
    sentiment_text: String,
    address_result_visible: bool,
    sentiment_result_visible: bool,
    sentiment_reading: Option<SentimentReading>,
}

impl DemoSession {
    pub fn active(&self) -> Option<DemoId> {
        self.active
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn sentiment_text(&self) -> &str {
        &self.sentiment_text
    }

    pub fn address_result_visible(&self) -> bool {
        self.address_result_visible
    }

    pub fn sentiment_result_visible(&self) -> bool {
        self.sentiment_result_visible
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Owns a [`DemoSession`] and the randomness used by the sentiment demo.
#[derive(Debug)]
pub struct DemoController<S = BoxedSource> {
    session: DemoSession,
    source: S,
}

impl DemoController<BoxedSource> {
    /// Controller with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_source(Box::new(RngSource::from_entropy()))
    }
}

impl Default for DemoController<BoxedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentSource> DemoController<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            session: DemoSession::default(),
            source,
        }
    }

    pub fn session(&self) -> &DemoSession {
        &self.session
    }

    pub fn active(&self) -> Option<DemoId> {
        self.session.active
    }

    pub fn is_open(&self, id: DemoId) -> bool {
        self.session.active == Some(id)
    }

    pub fn address_text(&self) -> &str {
        &self.session.address_text
    }

    pub fn sentiment_text(&self) -> &str {
        &self.session.sentiment_text
    }

    /// Show the modal for `id`, replacing whatever was open.
    pub fn open_demo(&mut self, id: DemoId) {
        if let Some(previous) = self.session.active.filter(|prev| *prev != id) {
            debug!(from = %previous, to = %id, "switching demo");
        } else {
            debug!(demo = %id, "opening demo");
        }
        self.session.active = Some(id);
    }

    /// Hide any open modal and clear both demos.
    pub fn close_demo(&mut self) {
        if let Some(id) = self.session.active {
            debug!(demo = %id, "closing demo");
        }
        self.session.reset();
    }

    pub fn set_address_text(&mut self, text: impl Into<String>) {
        self.session.address_text = text.into();
    }

    /// Keystroke update. A visible result is re-rolled for the new text.
    pub fn set_sentiment_text(&mut self, text: impl Into<String>) {
        self.session.sentiment_text = text.into();
        if self.session.sentiment_result_visible {
            self.session.sentiment_reading =
                Some(guess_sentiment(&self.session.sentiment_text, &mut self.source));
        }
    }

    /// Whether the "Clean Address" button is enabled.
    pub fn can_submit_address(&self) -> bool {
        self.is_open(DemoId::AddressCleaning) && !self.session.address_text.trim().is_empty()
    }

    /// Whether the "Analyze Sentiment" button is enabled.
    pub fn can_submit_sentiment(&self) -> bool {
        self.is_open(DemoId::SentimentAnalysis) && !self.session.sentiment_text.trim().is_empty()
    }

    /// Reveal the cleaned address. Returns `false` and changes nothing when
    /// the address demo is not open or its text is blank.
    pub fn submit_address_demo(&mut self) -> bool {
        if !self.can_submit_address() {
            return false;
        }
        self.session.address_result_visible = true;
        debug!("address demo submitted");
        true
    }

    /// Reveal a sentiment reading. Returns `false` and changes nothing when
    /// the sentiment demo is not open or its text is blank.
    pub fn submit_sentiment_demo(&mut self) -> bool {
        if !self.can_submit_sentiment() {
            return false;
        }
        let reading = guess_sentiment(&self.session.sentiment_text, &mut self.source);
        self.session.sentiment_result_visible = true;
        self.session.sentiment_reading = Some(reading);
        debug!(sentiment = %reading.sentiment, "sentiment demo submitted");
        true
    }

    /// Submit whichever demo is open.
    pub fn submit_active(&mut self) -> bool {
        match self.session.active {
            Some(DemoId::AddressCleaning) => self.submit_address_demo(),
            Some(DemoId::SentimentAnalysis) => self.submit_sentiment_demo(),
            None => false,
        }
    }

    /// Cleaned address for the open, submitted address demo.
    ///
    /// May be empty if the text was cleared after submitting; the view shows
    /// a placeholder then.
    pub fn address_result(&self) -> Option<String> {
        (self.is_open(DemoId::AddressCleaning) && self.session.address_result_visible)
            .then(|| clean_address(&self.session.address_text))
    }

    /// Reading for the open, submitted sentiment demo. Neutral once the
    /// text has been emptied.
    pub fn sentiment_result(&self) -> Option<SentimentReading> {
        if !(self.is_open(DemoId::SentimentAnalysis) && self.session.sentiment_result_visible) {
            return None;
        }
        if self.session.sentiment_text.is_empty() {
            return Some(SentimentReading::NEUTRAL);
        }
        Some(self.session.sentiment_reading.unwrap_or(SentimentReading::NEUTRAL))
    }
}
