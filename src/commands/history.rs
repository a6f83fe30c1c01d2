use serde::Serialize;
use tauri::State;
use tracing::warn;

use crate::api::types::QueryRecord;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::pagination::PageCursor;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPageView {
    pub page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub history: Vec<QueryRecord>,
}

impl HistoryPageView {
    fn empty(page_size: u64) -> Self {
        let cursor = PageCursor::new(page_size, 0);
        Self {
            page: cursor.page(),
            total_pages: cursor.total_pages(),
            total: 0,
            has_prev: false,
            has_next: false,
            history: Vec::new(),
        }
    }
}

/// One server-paginated page of a document's query history. The requested
/// page is clamped against the reported total; a fetch failure degrades to
/// an empty history list rather than an error.
#[tauri::command]
pub async fn fetch_query_history(
    api: State<'_, ApiClient>,
    config: State<'_, AppConfig>,
    pdf_id: String,
    page: u64,
) -> Result<HistoryPageView, String> {
    let size = config.queries_page_size;
    let requested = page.max(1);

    let first = match api
        .fetch_query_history(&pdf_id, (requested - 1) * size, size)
        .await
    {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!(%pdf_id, error = %e, "failed to fetch query history");
            return Ok(HistoryPageView::empty(size));
        }
    };

    let mut cursor = PageCursor::new(size, first.total);
    cursor.set_page(requested);

    // The requested page was past the end; refetch the clamped page.
    let history = if cursor.page() == requested {
        first.history
    } else {
        match api.fetch_query_history(&pdf_id, cursor.skip(), size).await {
            Ok(fetched) => fetched.history,
            Err(e) => {
                warn!(%pdf_id, error = %e, "failed to fetch query history");
                Vec::new()
            }
        }
    };

    Ok(HistoryPageView {
        page: cursor.page(),
        total_pages: cursor.total_pages(),
        total: cursor.total_items(),
        has_prev: cursor.has_prev(),
        has_next: cursor.has_next(),
        history,
    })
}
