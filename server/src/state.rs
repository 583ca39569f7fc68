//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    submissions_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_submissions_dir(config.submissions_dir.clone())
    }

    #[must_use]
    pub fn with_submissions_dir(dir: PathBuf) -> Self {
        Self { submissions_dir: Arc::new(dir) }
    }

    /// Directory accepted contact form submissions are written to.
    pub fn submissions_dir(&self) -> &Path {
        &self.submissions_dir
    }
}
