use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeTextRequest<'a> {
    pub text: &'a str,
}

/// Result of a pasted-text analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TextAnalysis {
    pub result: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of the user's analysis history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AnalysisRecord {
    pub id: i64,
    pub content: String,
    pub analysis_result: String,
    pub created_at: Option<String>,
}

/// An uploaded document. `content` is only present on upload and detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Document {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub upload_date: Option<String>,
}

impl Document {
    pub fn status_display(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}
