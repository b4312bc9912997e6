//! Resume section state.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use serde::{Deserialize, Serialize};

/// Uploaded resume document, stored as a data-URL so it survives reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    /// Original file name of the upload, if any.
    pub file_name: Option<String>,
    /// Data-URL of the uploaded document, if any.
    pub data_url: Option<String>,
}

impl ResumeState {
    /// True once the owner has uploaded a document.
    #[must_use]
    pub fn has_upload(&self) -> bool {
        self.data_url.is_some()
    }

    /// Name offered in the browser's save dialog.
    #[must_use]
    pub fn download_name(&self, owner: &str) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}_Resume.pdf", owner.replace(' ', "_")))
    }
}
