use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use tauri::State;
use tracing::{error, info, warn};

use crate::api::types::{Document, DocumentWithQueries};
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::pagination::PageCursor;
use crate::session::{PendingAction, SessionState};

/// Handed to the webview so it can render a confirmation step. The staged
/// action only runs when the token comes back via the confirm command.
#[derive(Debug, Clone, Serialize)]
pub struct StagedConfirmation {
    pub token: String,
    pub summary: String,
}

/// Sidebar cache of the full document list, so page changes re-slice in
/// memory instead of refetching. Invalidated after uploads and deletes.
#[derive(Default)]
pub struct DocumentCache(Mutex<Option<Vec<DocumentWithQueries>>>);

impl DocumentCache {
    fn get(&self) -> Option<Vec<DocumentWithQueries>> {
        self.0.lock().unwrap().clone()
    }

    fn set(&self, documents: Vec<DocumentWithQueries>) {
        *self.0.lock().unwrap() = Some(documents);
    }

    pub fn invalidate(&self) {
        *self.0.lock().unwrap() = None;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentPageView {
    pub page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub documents: Vec<DocumentWithQueries>,
}

#[tauri::command]
pub fn stage_upload(
    session: State<'_, SessionState>,
    path: String,
) -> Result<StagedConfirmation, String> {
    let path = PathBuf::from(path);
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Not a file path: {}", path.display()))?;
    if !path.is_file() {
        return Err(format!("File not found: {}", path.display()));
    }
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err("PDF files only".into());
    }

    let summary = format!("Do you want to submit this PDF: {}?", filename);
    let token = session.stage(PendingAction::Upload { path, filename });
    Ok(StagedConfirmation { token, summary })
}

#[tauri::command]
pub async fn confirm_upload(
    api: State<'_, ApiClient>,
    session: State<'_, SessionState>,
    cache: State<'_, DocumentCache>,
    token: String,
) -> Result<String, String> {
    let action = session
        .take_pending(&token)
        .ok_or("No upload is awaiting confirmation")?;
    let PendingAction::Upload { path, filename } = action else {
        return Err("The staged action is not an upload".into());
    };

    let bytes = std::fs::read(&path).map_err(|e| e.to_string())?;
    let pdf_id = api.upload_document(&filename, bytes).await.map_err(|e| {
        error!(file = %filename, error = %e, "file upload failed");
        e.to_string()
    })?;

    // Only a successful upload may touch the active id.
    session.set_active_document(&pdf_id);
    cache.invalidate();
    info!(%pdf_id, file = %filename, "document uploaded");
    Ok(pdf_id)
}

#[tauri::command]
pub fn stage_delete(
    session: State<'_, SessionState>,
    pdf_id: String,
) -> Result<StagedConfirmation, String> {
    if pdf_id.is_empty() {
        return Err("No PDF to delete.".into());
    }
    let token = session.stage(PendingAction::Delete { pdf_id });
    Ok(StagedConfirmation {
        token,
        summary: "Are you sure you want to delete this PDF?".into(),
    })
}

#[tauri::command]
pub async fn confirm_delete(
    api: State<'_, ApiClient>,
    session: State<'_, SessionState>,
    cache: State<'_, DocumentCache>,
    token: String,
) -> Result<(), String> {
    let action = session
        .take_pending(&token)
        .ok_or("No deletion is awaiting confirmation")?;
    let PendingAction::Delete { pdf_id } = action else {
        return Err("The staged action is not a deletion".into());
    };

    // Local references go first, independent of the server outcome, so a
    // failed delete can never leave a stale active id behind.
    if session.active_document().as_deref() == Some(pdf_id.as_str()) {
        session.clear();
    }
    cache.invalidate();

    api.delete_document(&pdf_id).await.map_err(|e| {
        error!(%pdf_id, error = %e, "file deletion failed");
        e.to_string()
    })?;
    info!(%pdf_id, "document deleted");
    Ok(())
}

#[tauri::command]
pub fn cancel_pending(session: State<'_, SessionState>) {
    session.cancel_pending();
}

#[tauri::command]
pub async fn list_pdfs(api: State<'_, ApiClient>) -> Result<Vec<Document>, String> {
    api.list_documents().await.map_err(|e| {
        error!(error = %e, "failed to list documents");
        e.to_string()
    })
}

#[tauri::command]
pub async fn list_pdfs_with_queries(
    api: State<'_, ApiClient>,
) -> Result<Vec<DocumentWithQueries>, String> {
    api.list_documents_with_queries().await.map_err(|e| {
        error!(error = %e, "failed to list documents with queries");
        e.to_string()
    })
}

/// One sidebar page of documents. The full list is fetched once and page
/// changes slice the cached copy; a fetch failure degrades to an empty
/// sidebar rather than an error.
#[tauri::command]
pub async fn sidebar_documents(
    api: State<'_, ApiClient>,
    config: State<'_, AppConfig>,
    cache: State<'_, DocumentCache>,
    page: u64,
    refresh: bool,
) -> Result<DocumentPageView, String> {
    let documents = match cache.get() {
        Some(cached) if !refresh => cached,
        _ => match api.list_documents_with_queries().await {
            Ok(fetched) => {
                cache.set(fetched.clone());
                fetched
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch documents, showing empty sidebar");
                Vec::new()
            }
        },
    };

    let mut cursor = PageCursor::new(config.docs_page_size, documents.len() as u64);
    cursor.set_page(page);

    Ok(DocumentPageView {
        page: cursor.page(),
        total_pages: cursor.total_pages(),
        total: cursor.total_items(),
        has_prev: cursor.has_prev(),
        has_next: cursor.has_next(),
        documents: cursor.slice(&documents).to_vec(),
    })
}
