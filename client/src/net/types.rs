//! Wire types for the contact form, shared by the page and the API handler.
//!
//! DESIGN
//! ======
//! The server depends on this crate, so normalization and validation live
//! here once and both sides agree on what an acceptable message looks like.
//! Validation checks every field and reports one error per field, so a form
//! can be redisplayed with all of its problems at once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Longest message body accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// A contact form submission. Missing fields deserialize as empty strings.
///
/// `age` stays textual so whatever was typed can be echoed back on error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub age: String,
    pub message: String,
}

/// Reasons a contact form field is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum FormError {
    #[error("Please tell us your name.")]
    MissingName,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("That email address does not look right.")]
    InvalidEmail,

    #[error("Please enter your age.")]
    MissingAge,

    #[error("Age may only contain digits.")]
    InvalidAge,

    #[error("Please write a message.")]
    MissingMessage,

    #[error("Message is too long (max {MAX_MESSAGE_CHARS} characters).")]
    MessageTooLong,
}

impl FormError {
    const ALL: [Self; 7] = [
        Self::MissingName,
        Self::MissingEmail,
        Self::InvalidEmail,
        Self::MissingAge,
        Self::InvalidAge,
        Self::MissingMessage,
        Self::MessageTooLong,
    ];

    /// Form field the error belongs to.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingAge | Self::InvalidAge => "age",
            Self::MissingMessage | Self::MessageTooLong => "message",
        }
    }

    /// Stable identifier used in redirect query strings.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingEmail => "missing_email",
            Self::InvalidEmail => "invalid_email",
            Self::MissingAge => "missing_age",
            Self::InvalidAge => "invalid_age",
            Self::MissingMessage => "missing_message",
            Self::MessageTooLong => "message_too_long",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

/// Field name -> the error for that field.
pub type FieldErrors = BTreeMap<&'static str, FormError>;

/// Comma-separated error codes, as carried in the form retry query.
pub fn encode_error_codes(errors: &FieldErrors) -> String {
    errors.values().map(|e| e.code()).collect::<Vec<_>>().join(",")
}

/// Inverse of [`encode_error_codes`]; unknown codes are skipped.
pub fn decode_error_codes(raw: &str) -> FieldErrors {
    raw.split(',')
        .filter_map(|code| FormError::from_code(code.trim()))
        .map(|e| (e.field(), e))
        .collect()
}

impl ContactMessage {
    /// Trim name, email and age, then check every field.
    ///
    /// The message body is kept as typed; it only has to contain something
    /// other than whitespace.
    ///
    /// # Errors
    ///
    /// Returns one [`FormError`] per offending field.
    pub fn validated(self) -> Result<Self, FieldErrors> {
        let normalized = Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            age: self.age.trim().to_owned(),
            message: self.message,
        };

        let mut errors = FieldErrors::new();
        let mut reject = |e: FormError| {
            errors.insert(e.field(), e);
        };

        if normalized.name.is_empty() {
            reject(FormError::MissingName);
        }

        if normalized.email.is_empty() {
            reject(FormError::MissingEmail);
        } else if !looks_like_email(&normalized.email) {
            reject(FormError::InvalidEmail);
        }

        if normalized.age.is_empty() {
            reject(FormError::MissingAge);
        } else if !normalized.age.chars().all(|c| c.is_ascii_digit()) {
            reject(FormError::InvalidAge);
        }

        if normalized.message.trim().is_empty() {
            reject(FormError::MissingMessage);
        } else if normalized.message.chars().count() > MAX_MESSAGE_CHARS {
            reject(FormError::MessageTooLong);
        }

        if errors.is_empty() { Ok(normalized) } else { Err(errors) }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_address_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

/// `local@domain.tld`: word chars, dots and dashes on both sides of a single
/// `@`, and a final dot followed by word chars only.
fn looks_like_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(is_address_char)
        && !host.is_empty()
        && host.chars().all(is_address_char)
        && !tld.is_empty()
        && tld.chars().all(is_word_char)
}

/// Body returned by `POST /api/form` on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReceipt {
    pub submitted: bool,
    #[serde(flatten)]
    pub contact: ContactMessage,
    /// Name of the file the submission was stored in.
    pub filename: String,
    /// `/result?...` page describing this submission.
    pub result_url: String,
}

/// Body returned by API routes on failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    /// Per-field messages for rejected form input.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ApiError {
    pub fn invalid_form(errors: &FieldErrors) -> Self {
        Self {
            error: "invalid form".to_owned(),
            errors: errors
                .iter()
                .map(|(field, e)| ((*field).to_owned(), e.to_string()))
                .collect(),
        }
    }
}
