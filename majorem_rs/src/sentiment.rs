//! Sentiment analysis demo transform.
//!
//! This is a placeholder, not a classifier: non-empty text gets a coin flip
//! between positive and negative plus a decorative confidence score. Empty
//! text is always neutral and never touches the randomness source.
//!
//! Randomness goes through [`SentimentSource`] so callers can pin outcomes.
//!
//! ```rust
//! use majorem::sentiment::{guess_sentiment, FixedSource, Sentiment};
//!
//! let mut source = FixedSource::new(Sentiment::Positive, 91);
//! let reading = guess_sentiment("Great support team!", &mut source);
//! assert_eq!(reading.sentiment, Sentiment::Positive);
//! assert_eq!(reading.confidence, Some(91));
//!
//! let reading = guess_sentiment("", &mut source);
//! assert_eq!(reading.sentiment, Sentiment::Neutral);
//! assert_eq!(source.draws(), 1);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Confidence scores are drawn uniformly from this range.
pub const CONFIDENCE_RANGE: RangeInclusive<u8> = 80..=99;

/// Label produced by the sentiment demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lowercase label, also used as a CSS modifier.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Badge text shown next to the analyze button.
    pub fn badge(self) -> &'static str {
        match self {
            Sentiment::Positive => "😊 Positive",
            Sentiment::Negative => "😞 Negative",
            Sentiment::Neutral => "😐 Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One result of the sentiment demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub sentiment: Sentiment,
    /// Display-only score in [`CONFIDENCE_RANGE`]; `None` for neutral.
    pub confidence: Option<u8>,
}

impl SentimentReading {
    pub const NEUTRAL: SentimentReading = SentimentReading {
        sentiment: Sentiment::Neutral,
        confidence: None,
    };
}

/// Source of the two random draws the demo needs.
pub trait SentimentSource {
    /// `true` means positive.
    fn coin_flip(&mut self) -> bool;

    /// A score within [`CONFIDENCE_RANGE`].
    fn confidence(&mut self) -> u8;
}

impl<S: SentimentSource + ?Sized> SentimentSource for Box<S> {
    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }

    fn confidence(&mut self) -> u8 {
        (**self).confidence()
    }
}

/// Boxed source used where the concrete generator is chosen at runtime.
pub type BoxedSource = Box<dyn SentimentSource + Send + Sync>;

/// [`SentimentSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence, handy for static previews.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SentimentSource for RngSource<R> {
    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn confidence(&mut self) -> u8 {
        self.rng.gen_range(CONFIDENCE_RANGE)
    }
}

/// Deterministic source that always returns the same outcome.
///
/// Counts how many readings it produced so callers can check that empty
/// input never drew from it.
#[derive(Debug, Clone)]
pub struct FixedSource {
    positive: bool,
    confidence: u8,
    draws: usize,
}

impl FixedSource {
    /// `sentiment` other than [`Sentiment::Positive`] yields negative readings.
    /// `confidence` is clamped into [`CONFIDENCE_RANGE`].
    pub fn new(sentiment: Sentiment, confidence: u8) -> Self {
        Self {
            positive: sentiment == Sentiment::Positive,
            confidence: confidence.clamp(*CONFIDENCE_RANGE.start(), *CONFIDENCE_RANGE.end()),
            draws: 0,
        }
    }

    /// Number of coin flips taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl SentimentSource for FixedSource {
    fn coin_flip(&mut self) -> bool {
        self.draws += 1;
        self.positive
    }

    fn confidence(&mut self) -> u8 {
        self.confidence
    }
}

/// Guess the sentiment of `text`.
///
/// Empty text is neutral without a draw. Whitespace counts as content here;
/// the submit guard trims, this transform does not.
pub fn guess_sentiment<S: SentimentSource + ?Sized>(text: &str, source: &mut S) -> SentimentReading {
    if text.is_empty() {
        return SentimentReading::NEUTRAL;
    }

    let sentiment = if source.coin_flip() {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };

    SentimentReading {
        sentiment,
        confidence: Some(source.confidence()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral_without_drawing() {
        let mut source = FixedSource::new(Sentiment::Positive, 85);
        let reading = guess_sentiment("", &mut source);
        assert_eq!(reading, SentimentReading::NEUTRAL);
        assert_eq!(reading.confidence, None);
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn fixed_source_pins_the_label() {
        let mut positive = FixedSource::new(Sentiment::Positive, 90);
        let mut negative = FixedSource::new(Sentiment::Negative, 90);
        assert_eq!(
            guess_sentiment("love it", &mut positive).sentiment,
            Sentiment::Positive
        );
        assert_eq!(
            guess_sentiment("love it", &mut negative).sentiment,
            Sentiment::Negative
        );
    }

    #[test]
    fn fixed_source_clamps_confidence() {
        let mut low = FixedSource::new(Sentiment::Positive, 3);
        let mut high = FixedSource::new(Sentiment::Positive, 250);
        assert_eq!(guess_sentiment("x", &mut low).confidence, Some(80));
        assert_eq!(guess_sentiment("x", &mut high).confidence, Some(99));
    }

    #[test]
    fn rng_source_never_yields_neutral_for_text() {
        let mut source = RngSource::seeded(42);
        for _ in 0..500 {
            let reading = guess_sentiment("the shipment was late", &mut source);
            assert_ne!(reading.sentiment, Sentiment::Neutral);
            let confidence = reading.confidence.expect("confidence for non-empty text");
            assert!(CONFIDENCE_RANGE.contains(&confidence));
        }
    }

    #[test]
    fn rng_source_produces_both_labels() {
        let mut source = RngSource::seeded(7);
        let readings: Vec<_> = (0..200)
            .map(|_| guess_sentiment("ok", &mut source).sentiment)
            .collect();
        assert!(readings.contains(&Sentiment::Positive));
        assert!(readings.contains(&Sentiment::Negative));
    }

    #[test]
    fn whitespace_only_text_still_draws() {
        let mut source = FixedSource::new(Sentiment::Negative, 88);
        let reading = guess_sentiment("  ", &mut source);
        assert_eq!(reading.sentiment, Sentiment::Negative);
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: BoxedSource = Box::new(FixedSource::new(Sentiment::Positive, 97));
        let reading = guess_sentiment("fine", &mut source);
        assert_eq!(reading.sentiment, Sentiment::Positive);
        assert_eq!(reading.confidence, Some(97));
    }

    #[test]
    fn labels_and_badges() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::Neutral.badge(), "😐 Neutral");
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }
}
