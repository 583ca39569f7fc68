//! Contact form endpoints.
//!
//! Two transports share one accept step:
//! - `POST /api/form` takes JSON from the hydrated page and answers with a
//!   [`FormReceipt`] or a per-field [`ApiError`].
//! - `POST /form` takes the plain urlencoded post a browser sends without
//!   WASM and answers with a `303` redirect, either to the result page or
//!   back to the form with the typed values and error codes in the query.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use chrono::Local;
use client::net::types::{
    ApiError, ContactMessage, FieldErrors, FormReceipt, encode_error_codes,
};
use serde::Serialize;

use crate::services::submissions::{self, SubmissionError};
use crate::state::AppState;

pub use client::pages::contact_form::FORM_ACTION as FORM_PATH;

pub const RESULT_PATH: &str = "/result";

/// Why a submission was not accepted.
#[derive(Debug, thiserror::Error)]
pub enum FormRejection {
    /// Input failed validation; carries what was typed for redisplay.
    #[error("invalid form")]
    Invalid { draft: ContactMessage, errors: FieldErrors },

    #[error(transparent)]
    Storage(#[from] SubmissionError),

    #[error("result url encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Map a rejection to an HTTP status.
pub fn rejection_to_status(err: &FormRejection) -> StatusCode {
    match err {
        FormRejection::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        FormRejection::Storage(_) | FormRejection::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Serialize)]
struct ResultQuery<'a> {
    name: &'a str,
    email: &'a str,
    age: &'a str,
    message: &'a str,
    filename: &'a str,
}

#[derive(Serialize)]
struct RetryQuery<'a> {
    name: &'a str,
    email: &'a str,
    age: &'a str,
    message: &'a str,
    errors: String,
}

/// `/result?...` location describing a stored submission.
pub fn result_location(contact: &ContactMessage, filename: &str) -> Result<String, FormRejection> {
    let query = serde_urlencoded::to_string(ResultQuery {
        name: &contact.name,
        email: &contact.email,
        age: &contact.age,
        message: &contact.message,
        filename,
    })?;
    Ok(format!("{RESULT_PATH}?{query}"))
}

/// `/form?...` location that refills the form and lists what was wrong.
pub fn retry_location(draft: &ContactMessage, errors: &FieldErrors) -> Result<String, FormRejection> {
    let query = serde_urlencoded::to_string(RetryQuery {
        name: &draft.name,
        email: &draft.email,
        age: &draft.age,
        message: &draft.message,
        errors: encode_error_codes(errors),
    })?;
    Ok(format!("{FORM_PATH}?{query}"))
}

/// Validate, store and describe one submission.
async fn accept(state: &AppState, contact: ContactMessage) -> Result<FormReceipt, FormRejection> {
    let draft = contact.clone();
    let contact = contact
        .validated()
        .map_err(|errors| FormRejection::Invalid { draft, errors })?;

    let filename =
        submissions::save_submission(state.submissions_dir(), &contact, Local::now().naive_local())
            .await?;
    let result_url = result_location(&contact, &filename)?;

    tracing::info!(
        %filename,
        age = %contact.age,
        message_chars = contact.message.chars().count(),
        "contact form stored"
    );

    Ok(FormReceipt { submitted: true, contact, filename, result_url })
}

fn log_rejection(err: &FormRejection) {
    match err {
        FormRejection::Invalid { errors, .. } => {
            tracing::debug!(errors = %encode_error_codes(errors), "contact form rejected");
        }
        other => tracing::error!(error = %other, "contact form not stored"),
    }
}

/// `POST /api/form` — JSON submission from the hydrated page.
///
/// Missing fields are treated as empty strings.
pub async fn submit(
    State(state): State<AppState>,
    Json(contact): Json<ContactMessage>,
) -> Result<Json<FormReceipt>, (StatusCode, Json<ApiError>)> {
    accept(&state, contact).await.map(Json).map_err(|err| {
        log_rejection(&err);
        let body = match &err {
            FormRejection::Invalid { errors, .. } => ApiError::invalid_form(errors),
            _ => ApiError { error: "could not store submission".to_owned(), ..ApiError::default() },
        };
        (rejection_to_status(&err), Json(body))
    })
}

/// `POST /form` — urlencoded submission from a browser without WASM.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(contact): Form<ContactMessage>,
) -> Result<Redirect, (StatusCode, &'static str)> {
    let failed = (StatusCode::INTERNAL_SERVER_ERROR, "Could not store submission.");
    match accept(&state, contact).await {
        Ok(receipt) => Ok(Redirect::to(&receipt.result_url)),
        Err(FormRejection::Invalid { draft, errors }) => {
            tracing::debug!(errors = %encode_error_codes(&errors), "contact form rejected");
            retry_location(&draft, &errors)
                .map(|location| Redirect::to(&location))
                .map_err(|err| {
                    log_rejection(&err);
                    failed
                })
        }
        Err(err) => {
            log_rejection(&err);
            Err(failed)
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
