//! Property inquiries sent from a listing's contact form

use crate::{InquiryError, InquiryFieldError, PropertyId, PropertyRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose shape check: something, `@`, something, `.`, something.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

/// A request for more information about one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    /// Optional; never validated
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl Inquiry {
    /// Blank inquiry about `record`, with the message prefilled.
    pub fn for_property(record: &PropertyRecord) -> Self {
        Self {
            property_id: record.id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: default_message(&record.title),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Check every field and report all failures at once, in form order.
    pub fn validate(&self) -> Result<(), InquiryError> {
        let mut fields = Vec::new();

        if self.name.trim().is_empty() {
            fields.push(InquiryFieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            fields.push(InquiryFieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            fields.push(InquiryFieldError::EmailInvalid);
        }

        if self.message.trim().is_empty() {
            fields.push(InquiryFieldError::MessageRequired);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            tracing::debug!(property_id = %self.property_id, invalid = fields.len(), "rejected inquiry");
            Err(InquiryError::Invalid { fields })
        }
    }
}

/// Prefilled message for a listing; a blank title reads "this property".
pub fn default_message(title: &str) -> String {
    let subject = if title.trim().is_empty() {
        "this property"
    } else {
        title
    };
    format!(
        "I'm interested in {}. Please contact me with more information.",
        subject
    )
}

// ============================================================================
// TESTS
// ============================================================================
