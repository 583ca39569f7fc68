//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use super::types::{ContactMessage, FormReceipt};

pub const CONTACT_FORM_ENDPOINT: &str = "/api/form";

/// Why a contact form submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server rejected one or more fields (field -> message).
    #[error("invalid form")]
    Invalid(BTreeMap<String, String>),

    #[error("{0}")]
    Failed(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16) -> String {
    format!("submit failed: {status}")
}

/// Turn a non-success response body into a [`SubmitError`].
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: Option<super::types::ApiError>) -> SubmitError {
    match body {
        Some(body) if !body.errors.is_empty() => SubmitError::Invalid(body.errors),
        Some(body) if !body.error.is_empty() => SubmitError::Failed(body.error),
        _ => SubmitError::Failed(submit_failed_message(status)),
    }
}

/// Submit the contact form via `POST /api/form`.
///
/// # Errors
///
/// Returns the server's per-field messages for rejected input, or a
/// transport description when the request itself fails.
pub async fn submit_contact_form(contact: &ContactMessage) -> Result<FormReceipt, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let failed = |e: gloo_net::Error| SubmitError::Failed(e.to_string());
        let resp = gloo_net::http::Request::post(CONTACT_FORM_ENDPOINT)
            .json(contact)
            .map_err(failed)?
            .send()
            .await
            .map_err(failed)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<super::types::ApiError>().await;
            return Err(error_from_body(status, body.ok()));
        }
        resp.json::<FormReceipt>().await.map_err(failed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = contact;
        Err(SubmitError::Failed("not available on server".to_owned()))
    }
}
