use serde::{Deserialize, Serialize};

/// An uploaded PDF as the backend reports it. The `title` alias covers
/// backend variants that never renamed the field.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Document {
    pub id: String,
    #[serde(alias = "title")]
    pub filename: String,
    pub created_at: String,
}

/// One question/answer pair belonging to a document. Immutable once the
/// backend creates it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QueryRecord {
    pub id: String,
    pub query: String,
    pub response: String,
    #[serde(alias = "timestamp")]
    pub created_at: String,
}

/// Document with its query history embedded, from the combined endpoint
/// that avoids one history request per document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentWithQueries {
    pub id: String,
    #[serde(alias = "title")]
    pub filename: String,
    pub created_at: String,
    #[serde(default)]
    pub queries: Vec<QueryRecord>,
}

/// One slice of a document's query history plus the full count, which
/// drives the per-document pagination cursor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryPage {
    #[serde(default)]
    pub history: Vec<QueryRecord>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct UploadEnvelope {
    pub status: String,
    pub data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
pub struct UploadData {
    pub pdf_id: String,
}

#[derive(Debug, Serialize)]
pub struct QueryBody<'a> {
    pub pdf_id: &'a str,
    pub query: &'a str,
}

/// Answer payload for `POST /query`. The backend replies either with a
/// single `response` string or with a `results` list whose first element
/// is canonical.
#[derive(Debug, Deserialize)]
pub struct QueryReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    results: Option<Vec<String>>,
}

impl QueryReply {
    /// The canonical answer, or `None` when the backend found nothing.
    pub fn into_answer(self) -> Option<String> {
        if let Some(response) = self.response {
            return Some(response);
        }
        self.results.and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_envelope_success() {
        let envelope: UploadEnvelope =
            serde_json::from_str(r#"{"status":"success","data":{"pdf_id":"abc123"}}"#).unwrap();
        assert_eq!(envelope.status, "success");
        assert_eq!(envelope.data.unwrap().pdf_id, "abc123");
    }

    #[test]
    fn test_query_reply_response_variant() {
        let reply: QueryReply = serde_json::from_str(r#"{"response":"$4.2M"}"#).unwrap();
        assert_eq!(reply.into_answer(), Some("$4.2M".to_string()));
    }

    #[test]
    fn test_query_reply_results_variant_first_is_canonical() {
        let reply: QueryReply =
            serde_json::from_str(r#"{"results":["first answer","second answer"]}"#).unwrap();
        assert_eq!(reply.into_answer(), Some("first answer".to_string()));
    }

    #[test]
    fn test_query_reply_empty() {
        let reply: QueryReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.into_answer(), None);

        let reply: QueryReply = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert_eq!(reply.into_answer(), None);
    }

    #[test]
    fn test_document_title_alias() {
        let doc: Document =
            serde_json::from_str(r#"{"id":"d1","title":"report.pdf","created_at":"2026-01-02"}"#)
                .unwrap();
        assert_eq!(doc.filename, "report.pdf");
    }

    #[test]
    fn test_history_page_defaults() {
        let page: HistoryPage = serde_json::from_str("{}").unwrap();
        assert!(page.history.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_document_with_queries_embedded() {
        let json = r#"{
            "id": "d1",
            "filename": "report.pdf",
            "created_at": "2026-01-02",
            "queries": [
                {"id": "q1", "query": "total revenue?", "response": "$4.2M", "timestamp": "2026-01-03"}
            ]
        }"#;
        let doc: DocumentWithQueries = serde_json::from_str(json).unwrap();
        assert_eq!(doc.queries.len(), 1);
        assert_eq!(doc.queries[0].created_at, "2026-01-03");
    }
}
