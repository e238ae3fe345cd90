//! Contact form draft and its local-only submit handler.
//!
//! There is no backend. A successful submit produces an [`Acknowledgment`]
//! for the page to display and clears the draft.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MajoremError;

/// Text shown to the visitor after a successful submit.
pub const ACKNOWLEDGMENT_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// One of the four required contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Company,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Company,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Element id and form name.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Company => "company",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Company => "Company",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// `type` attribute for single-line inputs, `None` for the textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            ContactField::Name | ContactField::Company => Some("text"),
            ContactField::Email => Some("email"),
            ContactField::Message => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContactField {
    type Err = MajoremError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| MajoremError::UnknownField(s.to_string()))
    }
}

/// In-progress contact form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Company => &mut self.company,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Same rule as HTML `required`: any non-empty value passes.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

/// Proof that a submission went through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    /// Name from the submitted draft.
    pub sender: String,
}

impl Acknowledgment {
    pub fn message(&self) -> &'static str {
        ACKNOWLEDGMENT_MESSAGE
    }
}

/// Owns the contact form draft and the pending acknowledgment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormController {
    draft: ContactFormDraft,
    acknowledgment: Option<Acknowledgment>,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    /// Unconditional keystroke update.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_complete()
    }

    /// Acknowledge and clear the draft.
    ///
    /// Returns `None` and leaves the draft alone if any field is empty; the
    /// form's `required` attributes keep the browser from getting here.
    pub fn submit(&mut self) -> Option<Acknowledgment> {
        if !self.can_submit() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        info!(company = %draft.company, "contact form acknowledged");
        let ack = Acknowledgment { sender: draft.name };
        self.acknowledgment = Some(ack.clone());
        Some(ack)
    }

    /// Pending acknowledgment, until dismissed.
    pub fn acknowledgment(&self) -> Option<&Acknowledgment> {
        self.acknowledgment.as_ref()
    }

    pub fn dismiss_acknowledgment(&mut self) {
        self.acknowledgment = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormController {
        let mut form = ContactFormController::new();
        form.update_field(ContactField::Name, "Ada");
        form.update_field(ContactField::Company, "Analytical Engines Ltd");
        form.update_field(ContactField::Email, "ada@example.com");
        form.update_field(ContactField::Message, "We need our CRM deduplicated.");
        form
    }

    #[test]
    fn field_ids_parse_back() {
        for field in ContactField::ALL {
            assert_eq!(field.id().parse::<ContactField>().unwrap(), field);
        }
        assert!("phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn update_field_assigns_verbatim() {
        let mut form = ContactFormController::new();
        form.update_field(ContactField::Email, "  not-validated  ");
        assert_eq!(form.draft().email, "  not-validated  ");
    }

    #[test]
    fn submit_with_all_fields_resets_and_acknowledges_once() {
        let mut form = filled();
        let ack = form.submit().expect("complete draft submits");
        assert_eq!(ack.sender, "Ada");
        assert_eq!(ack.message(), ACKNOWLEDGMENT_MESSAGE);
        assert!(form.draft().is_empty());
        assert_eq!(form.acknowledgment(), Some(&ack));

        // the reset draft cannot be submitted again
        assert_eq!(form.submit(), None);
        assert_eq!(form.acknowledgment(), Some(&ack));
    }

    #[test]
    fn submit_with_missing_field_is_a_no_op() {
        for missing in ContactField::ALL {
            let mut form = filled();
            form.update_field(missing, "");
            let before = form.clone();

            assert!(!form.can_submit());
            assert_eq!(form.submit(), None);
            assert_eq!(form, before);
            assert_eq!(form.draft().get(missing), "");
        }
    }

    #[test]
    fn dismiss_clears_acknowledgment() {
        let mut form = filled();
        form.submit();
        form.dismiss_acknowledgment();
        assert_eq!(form.acknowledgment(), None);
    }

    #[test]
    fn input_types_match_form() {
        assert_eq!(ContactField::Email.input_type(), Some("email"));
        assert_eq!(ContactField::Message.input_type(), None);
    }

    #[test]
    fn draft_deserializes_partial_json() {
        let draft: ContactFormDraft = serde_json::from_str(r#"{"name":"Grace"}"#).unwrap();
        assert_eq!(draft.name, "Grace");
        assert_eq!(draft.company, "");
        assert!(!draft.is_complete());
    }
}
