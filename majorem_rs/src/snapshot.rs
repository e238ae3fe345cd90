//! Preview snapshots for the static renderer.
//!
//! A snapshot describes what a visitor did (opened a demo, typed, pressed
//! submit, filled the contact form) rather than the resulting state. Replaying
//! it through the controllers keeps every state invariant intact, so a
//! snapshot can never produce a result box for a blank input.
//!
//! ```json
//! {
//!   "open_demo": "address-cleaning",
//!   "address_input": "123 main st, new york, ny 10001 usa",
//!   "submit": true
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::contact::{ContactField, ContactFormController, ContactFormDraft};
use crate::demo::{DemoController, DemoId};
use crate::error::Result;
use crate::sentiment::SentimentSource;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub open_demo: Option<DemoId>,
    pub address_input: String,
    pub sentiment_input: String,
    /// Press the open demo's submit button after typing.
    pub submit: bool,
    pub contact: ContactFormDraft,
    /// Press "Send Message" after filling the form.
    pub submit_contact: bool,
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Snapshot that only opens `demo`.
    pub fn open(demo: DemoId) -> Self {
        Self {
            open_demo: Some(demo),
            ..Default::default()
        }
    }

    /// Apply the recorded actions to fresh controllers.
    pub fn replay<S: SentimentSource>(
        &self,
        demo: &mut DemoController<S>,
        contact: &mut ContactFormController,
    ) {
        if let Some(id) = self.open_demo {
            demo.open_demo(id);
            demo.set_address_text(self.address_input.as_str());
            demo.set_sentiment_text(self.sentiment_input.as_str());
            if self.submit {
                demo.submit_active();
            }
        }

        for field in ContactField::ALL {
            contact.update_field(field, self.contact.get(field));
        }
        if self.submit_contact {
            contact.submit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{FixedSource, Sentiment};

    fn replay(snapshot: &PageSnapshot) -> (DemoController<FixedSource>, ContactFormController) {
        let mut demo = DemoController::with_source(FixedSource::new(Sentiment::Positive, 84));
        let mut contact = ContactFormController::new();
        snapshot.replay(&mut demo, &mut contact);
        (demo, contact)
    }

    #[test]
    fn parses_and_replays_address_submission() {
        let snapshot = PageSnapshot::from_json(
            r#"{"open_demo":"address-cleaning","address_input":"5 pine ln","submit":true}"#,
        )
        .unwrap();
        let (demo, _) = replay(&snapshot);
        assert_eq!(demo.address_result().as_deref(), Some("5 Pine Ln"));
    }

    #[test]
    fn blank_input_submission_stays_hidden() {
        let snapshot = PageSnapshot {
            open_demo: Some(DemoId::SentimentAnalysis),
            sentiment_input: "   ".into(),
            submit: true,
            ..Default::default()
        };
        let (demo, _) = replay(&snapshot);
        assert!(demo.is_open(DemoId::SentimentAnalysis));
        assert_eq!(demo.sentiment_result(), None);
    }

    #[test]
    fn text_without_open_demo_is_ignored() {
        let snapshot = PageSnapshot {
            address_input: "ignored".into(),
            submit: true,
            ..Default::default()
        };
        let (demo, _) = replay(&snapshot);
        assert_eq!(demo.active(), None);
        assert_eq!(demo.address_text(), "");
    }

    #[test]
    fn contact_submission_acknowledges() {
        let snapshot = PageSnapshot {
            contact: ContactFormDraft {
                name: "Lin".into(),
                company: "Acme".into(),
                email: "lin@acme.test".into(),
                message: "Hi".into(),
            },
            submit_contact: true,
            ..Default::default()
        };
        let (_, contact) = replay(&snapshot);
        assert!(contact.draft().is_empty());
        assert_eq!(contact.acknowledgment().map(|a| a.sender.as_str()), Some("Lin"));
    }

    #[test]
    fn bundled_previews_parse() {
        let address = PageSnapshot::from_json(include_str!("../../demos/address.json")).unwrap();
        let (demo, _) = replay(&address);
        assert_eq!(
            demo.address_result().as_deref(),
            Some("123 Main St, New York, Ny 10001 Usa")
        );

        let sentiment =
            PageSnapshot::from_json(include_str!("../../demos/sentiment.json")).unwrap();
        let (demo, _) = replay(&sentiment);
        assert_eq!(
            demo.sentiment_result().map(|r| r.sentiment),
            Some(Sentiment::Positive)
        );

        let contact = PageSnapshot::from_json(include_str!("../../demos/contact.json")).unwrap();
        let (_, contact) = replay(&contact);
        assert!(contact.acknowledgment().is_some());
    }

    #[test]
    fn rejects_unknown_demo() {
        let err = PageSnapshot::from_json(r#"{"open_demo":"fuzzy-matching"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid preview state"));
    }
}
