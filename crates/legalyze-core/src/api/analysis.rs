//! Document upload, text analysis and history.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use super::endpoints::analysis as ep;
use super::request::{ApiRequest, Upload};
use super::ApiClient;
use crate::models::{AnalysisRecord, AnalyzeTextRequest, Document, TextAnalysis};

impl ApiClient {
    /// Submit pasted contract text for analysis
    pub async fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        if text.trim().is_empty() {
            bail!("No text provided for analysis");
        }
        debug!(chars = text.chars().count(), "Submitting text for analysis");
        self.post(ep::ANALYZE, &AnalyzeTextRequest { text }).await
    }

    /// Upload a document file. The title defaults to the file name.
    pub async fn upload_document(&self, file: &Path, title: Option<&str>) -> Result<Document> {
        let bytes = std::fs::read(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.upload_bytes(&file_name, bytes, title).await
    }

    pub async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>, title: Option<&str>) -> Result<Document> {
        let mut upload = Upload::new(file_name, bytes);
        if let Some(title) = title {
            upload = upload.text("title", title);
        }
        debug!(file_name, size = upload.bytes.len(), "Uploading document");
        self.send_json(ApiRequest::post(ep::UPLOAD).multipart(upload)).await
    }

    /// Documents uploaded by the current user, newest first
    pub async fn documents(&self) -> Result<Vec<Document>> {
        self.get(ep::DOCUMENTS).await
    }

    pub async fn document(&self, id: i64) -> Result<Document> {
        self.get(&ep::document(id)).await
    }

    /// Past analyses of the current user, newest first
    pub async fn analysis_history(&self) -> Result<Vec<AnalysisRecord>> {
        self.get(ep::HISTORY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SessionManager, SessionTokens};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        let session = Arc::new(SessionManager::in_memory());
        session
            .establish(&SessionTokens {
                access: "a1".to_string(),
                refresh: "r1".to_string(),
            })
            .unwrap();
        ApiClient::new(&format!("{}/api", server.uri()), session).unwrap()
    }

    #[tokio::test]
    async fn analyze_text_returns_result() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze-text/"))
            .and(body_json(json!({"text": "The lessee shall indemnify..."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "The indemnity clause is unusually broad.",
                "message": "Analysis completed successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let analysis = client(&server).analyze_text("The lessee shall indemnify...").await?;
        assert_eq!(analysis.result, "The indemnity clause is unusually broad.");
        Ok(())
    }

    #[tokio::test]
    async fn blank_text_is_rejected_locally() -> Result<()> {
        let server = MockServer::start().await;
        let err = client(&server).analyze_text("   ").await.unwrap_err();
        assert_eq!(err.to_string(), "No text provided for analysis");
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn upload_document_sends_file_and_title() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/documents/upload/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11,
                "title": "Office lease",
                "content": "This lease...",
                "status": "pending",
                "upload_date": "2024-05-01T10:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir()?;
        let file = dir.path().join("lease.txt");
        std::fs::write(&file, "This lease...")?;

        let document = client(&server).upload_document(&file, Some("Office lease")).await?;
        assert_eq!(document.id, 11);
        assert_eq!(document.content.as_deref(), Some("This lease..."));

        let requests = server.received_requests().await.unwrap_or_default();
        let body = String::from_utf8_lossy(&requests[0].body).into_owned();
        assert!(body.contains("filename=\"lease.txt\""));
        assert!(body.contains("Office lease"));
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_fails_before_request() -> Result<()> {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir()?;
        let result = client(&server).upload_document(&dir.path().join("nope.pdf"), None).await;
        assert!(result.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn history_and_document_detail() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/analyses/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "content": "B", "analysis_result": "ok", "created_at": "2024-05-02T10:00:00Z"},
                {"id": 1, "content": "A", "analysis_result": "ok", "created_at": "2024-05-01T10:00:00Z"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/documents/11/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Document not found"})))
            .mount(&server)
            .await;

        let client = client(&server);
        let history = client.analysis_history().await?;
        assert_eq!(history.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);

        let err = client.document(11).await.unwrap_err();
        assert_eq!(err.downcast_ref::<crate::api::ApiError>().map(|e| e.to_string()).as_deref(), Some("Resource not found: Document not found"));
        Ok(())
    }
}
