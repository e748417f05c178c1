//! Owned request descriptions.
//!
//! A request is kept as plain data so it can be rebuilt and resubmitted
//! after a token refresh, including multipart uploads.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;

/// Whether a request has already been resubmitted after a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Fresh,
    Retried,
}

/// File attached to a multipart request
#[derive(Debug, Clone)]
pub struct Upload {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    pub fields: Vec<(String, String)>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            field: "file".to_string(),
            file_name,
            mime,
            bytes,
            fields: Vec::new(),
        }
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub(crate) fn to_form(&self) -> Result<Form> {
        let part = Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime)
            .with_context(|| format!("Invalid MIME type: {}", self.mime))?;

        let mut form = Form::new().part(self.field.clone(), part);
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}

/// MIME type for the document formats the backend extracts text from
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(Upload),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `analyses/`
    pub path: String,
    pub body: Body,
    /// Sent without credentials and never refreshed (login, signup)
    pub anonymous: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Body::Empty,
            anonymous: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Body::Json(serde_json::to_value(body).context("Failed to serialize request body")?);
        Ok(self)
    }

    pub fn multipart(mut self, upload: Upload) -> Self {
        self.body = Body::Multipart(upload);
        self
    }

    /// Send without a bearer token and without refresh on 401
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("lease.PDF"), "application/pdf");
        assert_eq!(mime_for("scan.jpeg"), "image/jpeg");
        assert_eq!(mime_for("noextension"), "application/octet-stream");
    }

    #[test]
    fn test_json_body_is_captured() {
        let request = ApiRequest::post("analyze-text/")
            .json(&serde_json::json!({"text": "hello"}))
            .unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(matches!(request.body, Body::Json(ref v) if v["text"] == "hello"));
        assert!(!request.anonymous);
    }

    #[test]
    fn test_upload_form_builds_repeatedly() {
        let upload = Upload::new("contract.txt", b"terms".to_vec()).text("title", "Contract");
        assert_eq!(upload.mime, "text/plain");
        assert!(upload.to_form().is_ok());
        assert!(upload.to_form().is_ok());
    }
}
