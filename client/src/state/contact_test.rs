use super::*;
use crate::net::types::{ContactMessage, FormError};

fn receipt(submitted: bool) -> FormReceipt {
    FormReceipt {
        submitted,
        contact: ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: "36".into(),
            message: "hi".into(),
        },
        filename: "submission_2026-10-19_12-00-00.txt".into(),
        result_url: "/result?name=Ada".into(),
    }
}

#[test]
fn default_is_editing() {
    assert_eq!(ContactState::default(), ContactState::Editing);
    assert!(!ContactState::default().is_busy());
}

#[test]
fn sending_and_submitted_are_busy() {
    assert!(ContactState::Sending.is_busy());
    assert!(ContactState::Submitted(receipt(true)).is_busy());
}

#[test]
fn from_field_errors_keeps_each_field() {
    let mut errors = FieldErrors::new();
    errors.insert("age", FormError::InvalidAge);
    errors.insert("email", FormError::MissingEmail);

    let state = ContactState::from_field_errors(&errors);

    assert_eq!(state.field_error("age").as_deref(), Some("Age may only contain digits."));
    assert_eq!(state.field_error("email").as_deref(), Some("Please enter your email address."));
    assert_eq!(state.field_error("name"), None);
    assert_eq!(state.error(), None);
}

#[test]
fn from_field_errors_empty_is_editing() {
    assert_eq!(ContactState::from_field_errors(&FieldErrors::new()), ContactState::Editing);
}

#[test]
fn from_result_accepted() {
    let state = ContactState::from_result(Ok(receipt(true)));
    assert_eq!(state, ContactState::Submitted(receipt(true)));
    assert_eq!(state.error(), None);
}

#[test]
fn from_result_not_submitted_is_failure() {
    let state = ContactState::from_result(Ok(receipt(false)));
    assert_eq!(state.error(), Some("message was not accepted"));
}

#[test]
fn from_result_field_errors() {
    let errors = BTreeMap::from([("name".to_owned(), "Please tell us your name.".to_owned())]);
    let state = ContactState::from_result(Err(SubmitError::Invalid(errors)));
    assert_eq!(state.field_error("name").as_deref(), Some("Please tell us your name."));
}

#[test]
fn from_result_transport_error_keeps_message() {
    let state = ContactState::from_result(Err(SubmitError::Failed("submit failed: 502".into())));
    assert_eq!(state.error(), Some("submit failed: 502"));
}
