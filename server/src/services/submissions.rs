//! Contact form submission storage.
//!
//! DESIGN
//! ======
//! Each accepted submission becomes one plain-text file named after the
//! local time it arrived, `submission_YYYY-MM-DD_HH-MM-SS.txt`. Files are
//! opened with `create_new`, so two submissions in the same second get
//! numbered suffixes instead of overwriting each other.

use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDateTime;
use client::net::types::ContactMessage;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub const FILENAME_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Same-second collisions tolerated before giving up.
const MAX_NAME_ATTEMPTS: u32 = 100;

const RULE_WIDTH: usize = 40;

/// Errors produced while storing a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no free submission filename for {0}")]
    NamesExhausted(String),
}

/// File name for a submission received at `at`. `attempt` 0 is the plain
/// name; later attempts append `_2`, `_3`, ...
pub fn submission_filename(at: &NaiveDateTime, attempt: u32) -> String {
    let stamp = at.format(FILENAME_TIME_FORMAT);
    if attempt == 0 {
        format!("submission_{stamp}.txt")
    } else {
        format!("submission_{stamp}_{}.txt", attempt + 1)
    }
}

/// Text body of a stored submission.
pub fn render_submission(contact: &ContactMessage, at: &NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "Contact form submission\n{rule}\n\n\
         Name: {}\n\
         Email: {}\n\
         Age: {}\n\
         Message: {}\n\
         \n{rule}\n\
         Submitted at: {}\n",
        contact.name,
        contact.email,
        contact.age,
        contact.message,
        at.format(SUBMITTED_AT_FORMAT),
    )
}

/// Write `contact` under `dir`, creating the directory if needed.
///
/// Returns the file name (not the full path) that was written.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub async fn save_submission(
    dir: &Path,
    contact: &ContactMessage,
    at: NaiveDateTime,
) -> Result<String, SubmissionError> {
    fs::create_dir_all(dir).await?;
    let body = render_submission(contact, &at);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let filename = submission_filename(&at, attempt);
        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&filename))
            .await;
        match opened {
            Ok(mut file) => {
                file.write_all(body.as_bytes()).await?;
                file.flush().await?;
                return Ok(filename);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }
    }

    Err(SubmissionError::NamesExhausted(submission_filename(&at, 0)))
}

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;
