use super::*;

use axum::body::Body;
use axum::extract::{FromRequest, Request};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::response::IntoResponse;

fn contact(name: &str, email: &str, age: &str, message: &str) -> ContactMessage {
    ContactMessage { name: name.into(), email: email.into(), age: age.into(), message: message.into() }
}

fn state_in(dir: &tempfile::TempDir) -> AppState {
    AppState::with_submissions_dir(dir.path().join("submissions"))
}

fn stored_files(state: &AppState) -> Vec<String> {
    match std::fs::read_dir(state.submissions_dir()) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn location(redirect: Redirect) -> (StatusCode, String) {
    let response = redirect.into_response();
    let location = response.headers()[LOCATION].to_str().unwrap().to_owned();
    (response.status(), location)
}

async fn urlencoded(body: &'static str) -> Form<ContactMessage> {
    let request = Request::builder()
        .method("POST")
        .uri("/form")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    Form::<ContactMessage>::from_request(request, &()).await.unwrap()
}

// =============================================================
// Locations
// =============================================================

#[test]
fn result_location_encodes_fields_and_filename() {
    let url = result_location(&contact("Ada L", "a@b.co", "36", "hi & bye"), "submission_x.txt").unwrap();
    assert_eq!(
        url,
        "/result?name=Ada+L&email=a%40b.co&age=36&message=hi+%26+bye&filename=submission_x.txt"
    );
}

#[test]
fn retry_location_carries_draft_and_codes() {
    let draft = contact("Ada", "nope", "", "hi");
    let errors = draft.clone().validated().unwrap_err();
    let url = retry_location(&draft, &errors).unwrap();
    assert_eq!(url, "/form?name=Ada&email=nope&age=&message=hi&errors=missing_age%2Cinvalid_email");
}

#[test]
fn rejection_to_status_mapping() {
    let invalid = FormRejection::Invalid { draft: ContactMessage::default(), errors: FieldErrors::new() };
    assert_eq!(rejection_to_status(&invalid), StatusCode::UNPROCESSABLE_ENTITY);

    let storage = FormRejection::Storage(SubmissionError::NamesExhausted("x".into()));
    assert_eq!(rejection_to_status(&storage), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================
// JSON: POST /api/form
// =============================================================

#[tokio::test]
async fn submit_stores_trimmed_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let state = state_in(&tmp);

    let Json(receipt) = submit(
        State(state.clone()),
        Json(contact(" Ada ", "ada@example.com ", " 36", "hello\n")),
    )
    .await
    .unwrap();

    assert!(receipt.submitted);
    assert_eq!(receipt.contact, contact("Ada", "ada@example.com", "36", "hello\n"));
    assert!(receipt.filename.starts_with("submission_"));
    assert!(receipt.result_url.starts_with("/result?name=Ada&"));
    assert!(receipt.result_url.ends_with(&format!("filename={}", receipt.filename)));

    let written =
        std::fs::read_to_string(state.submissions_dir().join(&receipt.filename)).unwrap();
    assert!(written.contains("Name: Ada\n"));
    assert!(written.contains("Email: ada@example.com\n"));
    assert!(written.contains("Age: 36\n"));
    assert!(written.contains("Message: hello\n"));
}

#[tokio::test]
async fn submit_rejects_with_per_field_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let state = state_in(&tmp);

    let (status, Json(body)) =
        submit(State(state.clone()), Json(contact("Ada", "a@b", "x1", "hi"))).await.unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "invalid form");
    assert_eq!(body.errors.keys().collect::<Vec<_>>(), vec!["age", "email"]);
    assert!(stored_files(&state).is_empty());
}

#[tokio::test]
async fn submit_name_only_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let (status, Json(body)) =
        submit(State(state_in(&tmp)), Json(contact("Ada", "", "", ""))).await.unwrap_err();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.errors.len(), 3);
}

#[tokio::test]
async fn submit_storage_failure_is_server_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("taken");
    std::fs::write(&blocker, "file, not dir").unwrap();
    let state = AppState::with_submissions_dir(blocker);

    let (status, Json(body)) = submit(
        State(state),
        Json(contact("Ada", "ada@example.com", "36", "hi")),
    )
    .await
    .unwrap_err();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "could not store submission");
    assert!(body.errors.is_empty());
}

// =============================================================
// urlencoded: POST /form
// =============================================================

#[tokio::test]
async fn submit_form_urlencoded_redirects_to_result() {
    let tmp = tempfile::tempdir().unwrap();
    let state = state_in(&tmp);
    let form = urlencoded("name=Ada+Lovelace&email=ada%40example.com&age=36&message=Hi+there").await;

    let (status, url) = location(submit_form(State(state.clone()), form).await.unwrap());

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert!(url.starts_with("/result?name=Ada+Lovelace&email=ada%40example.com&age=36&message=Hi+there&filename=submission_"));

    let files = stored_files(&state);
    assert_eq!(files.len(), 1);
    let written = std::fs::read_to_string(state.submissions_dir().join(&files[0])).unwrap();
    assert!(written.contains("Name: Ada Lovelace\n"));
    assert!(written.contains("Message: Hi there\n"));
}

#[tokio::test]
async fn submit_form_invalid_redirects_back_with_codes() {
    let tmp = tempfile::tempdir().unwrap();
    let state = state_in(&tmp);
    let form = urlencoded("name=Ada&email=ada&age=3.5").await;

    let (status, url) = location(submit_form(State(state.clone()), form).await.unwrap());

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        url,
        "/form?name=Ada&email=ada&age=3.5&message=&errors=invalid_age%2Cinvalid_email%2Cmissing_message"
    );
    assert!(stored_files(&state).is_empty());
}

#[tokio::test]
async fn submit_form_storage_failure_is_server_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("taken");
    std::fs::write(&blocker, "").unwrap();
    let form = urlencoded("name=Ada&email=ada%40example.com&age=36&message=hi").await;

    let (status, _) = submit_form(State(AppState::with_submissions_dir(blocker)), form)
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
