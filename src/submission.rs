use std::sync::Mutex;

use serde::Serialize;

/// Refusals raised before any network call is made. The messages are shown
/// to the user verbatim.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Please enter a question first")]
    EmptyQuery,
    #[error("Please add the file again")]
    MissingDocument,
    #[error("A query is already in progress")]
    Busy,
}

/// Check the local preconditions for a query submission and return the
/// `(pdf_id, trimmed query)` pair to send. Refused submissions never reach
/// the network.
pub fn validate(
    text: &str,
    active_document: Option<String>,
) -> Result<(String, String), GuardError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GuardError::EmptyQuery);
    }
    match active_document {
        Some(id) if !id.is_empty() => Ok((id, trimmed.to_string())),
        _ => Err(GuardError::MissingDocument),
    }
}

/// Entry in the runtime query history (newest first). Lives only for the
/// current session and is never persisted.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HistoryEntry {
    pub query: String,
    pub timestamp: String,
}

/// Serializes query submissions: idle -> submitting -> idle. A second
/// submission while one is in flight is refused, mirroring the disabled
/// submit control. Successful submissions are recorded in the runtime
/// history; failed ones are not.
#[derive(Default)]
pub struct SubmissionTracker {
    inner: Mutex<TrackerInner>,
}

#[derive(Default)]
struct TrackerInner {
    submitting: bool,
    history: Vec<HistoryEntry>,
}

impl SubmissionTracker {
    pub fn begin(&self) -> Result<(), GuardError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.submitting {
            return Err(GuardError::Busy);
        }
        inner.submitting = true;
        Ok(())
    }

    pub fn finish_ok(&self, query: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.submitting = false;
        inner.history.insert(
            0,
            HistoryEntry {
                query: query.to_string(),
                timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        );
    }

    pub fn finish_err(&self) {
        self.inner.lock().unwrap().submitting = false;
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.lock().unwrap().history.clone()
    }
}
