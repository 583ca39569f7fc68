//! Contact form page state.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::net::api::SubmitError;
use crate::net::types::{FieldErrors, FormReceipt};

/// Lifecycle of the contact form on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactState {
    /// Form shown, nothing sent yet.
    #[default]
    Editing,
    /// Request in flight.
    Sending,
    /// Input rejected; field name -> message.
    Invalid(BTreeMap<String, String>),
    /// The request itself failed.
    Failed(String),
    /// Server stored the message.
    Submitted(FormReceipt),
}

impl ContactState {
    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        if errors.is_empty() {
            return Self::Editing;
        }
        Self::Invalid(
            errors
                .iter()
                .map(|(field, e)| ((*field).to_owned(), e.to_string()))
                .collect(),
        )
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending | Self::Submitted(_))
    }

    /// Message for one field, if that field was rejected.
    pub fn field_error(&self, field: &str) -> Option<String> {
        match self {
            Self::Invalid(errors) => errors.get(field).cloned(),
            _ => None,
        }
    }

    /// Form-level failure not tied to a field.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fold an API result into the next state.
    pub fn from_result(result: Result<FormReceipt, SubmitError>) -> Self {
        match result {
            Ok(receipt) if receipt.submitted => Self::Submitted(receipt),
            Ok(_) => Self::Failed("message was not accepted".to_owned()),
            Err(SubmitError::Invalid(errors)) => Self::Invalid(errors),
            Err(SubmitError::Failed(message)) => Self::Failed(message),
        }
    }
}
