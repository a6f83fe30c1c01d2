pub mod types;

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use types::{Document, DocumentWithQueries, HistoryPage, QueryBody, QueryReply, UploadEnvelope};

/// Client for the question-answering backend. One operation per endpoint,
/// no automatic retries; failures are reported to the caller as-is.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(ApiError::Api { status, message })
        }
    }

    /// Upload a PDF and return the server-assigned document id.
    pub async fn upload_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let resp = self
            .client
            .post(self.url("/upload_pdf"))
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check(resp).await?;

        let envelope: UploadEnvelope = resp.json().await?;
        if envelope.status != "success" {
            return Err(ApiError::Decode(format!(
                "upload reported status {:?}",
                envelope.status
            )));
        }
        let pdf_id = envelope
            .data
            .map(|d| d.pdf_id)
            .ok_or_else(|| ApiError::Decode("upload reply missing pdf_id".into()))?;
        debug!(%pdf_id, file = %filename, "document uploaded");
        Ok(pdf_id)
    }

    pub async fn delete_document(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(&format!("/pdfs/{}", id)))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Ask a question about a document. `None` means the backend replied
    /// without an answer, which is not an error.
    pub async fn submit_query(
        &self,
        pdf_id: &str,
        query: &str,
    ) -> Result<Option<String>, ApiError> {
        let resp = self
            .client
            .post(self.url("/query"))
            .json(&QueryBody { pdf_id, query })
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let reply: QueryReply = resp.json().await?;
        Ok(reply.into_answer())
    }

    /// Documents in the server's order, newest first. Never re-sorted.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let resp = self.client.get(self.url("/pdfs")).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Same list with each document's query history embedded, so the
    /// sidebar needs a single request instead of one per document.
    pub async fn list_documents_with_queries(
        &self,
    ) -> Result<Vec<DocumentWithQueries>, ApiError> {
        let resp = self
            .client
            .get(self.url("/pdfs_with_queries"))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    /// One slice of a document's query history plus the total count.
    pub async fn fetch_query_history(
        &self,
        pdf_id: &str,
        skip: u64,
        limit: u64,
    ) -> Result<HistoryPage, ApiError> {
        let resp = self
            .client
            .get(self.url(&format!("/history/{}", pdf_id)))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.url("/query"), "http://localhost:8000/query");
    }

    #[test]
    fn test_history_url_includes_document_id() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.url(&format!("/history/{}", "abc123")),
            "http://localhost:8000/history/abc123"
        );
    }
}
