//! Client-side checks for the contact form. Nothing is submitted anywhere.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const ERROR_SUMMARY: &str = "Please correct the errors below.";
pub const SUCCESS_MESSAGE: &str = "Message sent! We will reply during business hours.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{7,}$").expect("phone regex compiles"));

/// Form controls in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Element id of the control; its inline message lives at `<id>-error`.
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn error_id(&self) -> String {
        format!("{}-error", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted,
    /// At least one error, in form order.
    Rejected(Vec<FieldError>),
}

impl FormOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormOutcome::Accepted)
    }

    /// Field that should receive focus after a failed submit.
    pub fn first_invalid(&self) -> Option<ContactField> {
        match self {
            FormOutcome::Accepted => None,
            FormOutcome::Rejected(errors) => errors.first().map(|e| e.field),
        }
    }

    pub fn status_message(&self) -> &'static str {
        match self {
            FormOutcome::Accepted => SUCCESS_MESSAGE,
            FormOutcome::Rejected(_) => ERROR_SUMMARY,
        }
    }

    pub fn status_class(&self) -> &'static str {
        match self {
            FormOutcome::Accepted => "form-status success",
            FormOutcome::Rejected(_) => "form-status error",
        }
    }
}

/// Trimmed values of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(custom = "validate_email")]
    pub email: String,

    /// Optional; empty means not provided.
    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(length(min = 1, message = "Please select a subject."))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(field_error("required", "Email is required."));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(field_error("email", "Please enter a valid email address."));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(field_error("phone", "Please enter a valid phone number."))
    }
}

impl ContactSubmission {
    pub fn from_raw(name: &str, email: &str, phone: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Run every field check and collect the failures in form order.
    pub fn check(&self) -> FormOutcome {
        let errors = match self.validate() {
            Ok(()) => return FormOutcome::Accepted,
            Err(errors) => errors,
        };
        let by_field = errors.field_errors();

        let collected: Vec<FieldError> = ContactField::ALL
            .iter()
            .filter_map(|field| {
                let first = by_field.get(field.id())?.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                Some(FieldError { field: *field, message })
            })
            .collect();

        tracing::debug!("Contact form rejected with {} field errors", collected.len());
        FormOutcome::Rejected(collected)
    }
}
