use serde::Serialize;
use tauri::State;
use tracing::{error, info, warn};

use crate::api::ApiClient;
use crate::session::{QuerySnapshot, SessionState};
use crate::submission::{self, HistoryEntry, SubmissionTracker};

/// Shown when the backend replied without an answer.
const NO_RESULTS: &str = "No results found.";

/// Submit the typed question against the active document. Refused locally,
/// with no network call, when the text is blank, no document is active, or
/// another submission is in flight.
#[tauri::command]
pub async fn submit_query(
    api: State<'_, ApiClient>,
    session: State<'_, SessionState>,
    tracker: State<'_, SubmissionTracker>,
    text: String,
) -> Result<String, String> {
    let (pdf_id, query) =
        submission::validate(&text, session.active_document()).map_err(|e| e.to_string())?;
    tracker.begin().map_err(|e| e.to_string())?;

    match api.submit_query(&pdf_id, &query).await {
        Ok(answer) => {
            let response = answer.unwrap_or_else(|| NO_RESULTS.to_string());
            session.set_last_query(QuerySnapshot {
                query: query.clone(),
                response: response.clone(),
                pdf_id,
                filename: None,
            });
            tracker.finish_ok(&query);
            info!(query = %query, "query answered");
            Ok(response)
        }
        Err(e) => {
            tracker.finish_err();
            error!(query = %query, error = %e, "query failed");
            Err(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayResult {
    pub query: String,
    pub pdf_id: String,
    pub filename: String,
    /// `None` renders as "no results" in the modal, never as an error.
    pub response: Option<String>,
}

/// Re-run a past query from the sidebar for the result modal. A backend
/// failure degrades to an empty result, matching the modal's fallback.
#[tauri::command]
pub async fn replay_query(
    api: State<'_, ApiClient>,
    session: State<'_, SessionState>,
    pdf_id: String,
    query: String,
    filename: String,
) -> Result<ReplayResult, String> {
    let response = match api.submit_query(&pdf_id, &query).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(%pdf_id, error = %e, "replay failed, showing empty result");
            None
        }
    };

    if let Some(response) = &response {
        session.set_last_query(QuerySnapshot {
            query: query.clone(),
            response: response.clone(),
            pdf_id: pdf_id.clone(),
            filename: Some(filename.clone()),
        });
    }

    Ok(ReplayResult {
        query,
        pdf_id,
        filename,
        response,
    })
}

/// Runtime history of this session's successful queries, newest first.
#[tauri::command]
pub fn runtime_history(tracker: State<'_, SubmissionTracker>) -> Vec<HistoryEntry> {
    tracker.history()
}

/// Snapshot for the detail view. `None` tells the webview to redirect back
/// to the main view.
#[tauri::command]
pub fn last_query_detail(session: State<'_, SessionState>) -> Option<QuerySnapshot> {
    session.last_query()
}
