
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category picked on the issue form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Bug,
    Feature,
    Improvement,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Bug => "bug",
            ReportKind::Feature => "feature",
            ReportKind::Improvement => "improvement",
            ReportKind::Other => "other",
        }
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Closed => "closed",
            ReportStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bug" => Ok(ReportKind::Bug),
            "feature" => Ok(ReportKind::Feature),
            "improvement" => Ok(ReportKind::Improvement),
            "other" => Ok(ReportKind::Other),
            other => Err(format!("unknown report type: {}", other)),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "in_progress" => Ok(ReportStatus::InProgress),
            "resolved" => Ok(ReportStatus::Resolved),
            "closed" => Ok(ReportStatus::Closed),
            other => Err(format!("unknown report status: {}", other)),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Issue submitted from the "report an issue" form.
#[derive(Debug, Clone, Serialize)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<String>,
}

/// Reporter summary embedded in admin report listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ReportAuthor {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Report {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<ReportKind>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub status: ReportStatus,
    #[serde(default)]
    pub user: Option<ReportAuthor>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Report {
    pub fn reporter_display(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or("Anonymous")
    }
}

/// Partial update for a report. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Admin notification raised when an issue is filed.
#[derive(Debug, Clone, Serialize)]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_serializes_type_field() {
        let report = NewReport {
            title: "Upload fails".to_string(),
            description: "PDF over 5MB rejected".to_string(),
            kind: ReportKind::Bug,
            priority: Priority::High,
            steps: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "bug");
        assert_eq!(json["priority"], "high");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_parse_admin_report() {
        let json = r#"{"id":1,"title":"Crash","description":"boom","status":"pending","priority":"critical","created_at":"2024-05-01T10:00:00Z","updated_at":null,"user":null}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.priority, Some(Priority::Critical));
        assert_eq!(report.reporter_display(), "Anonymous");
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let json = r#"{"id":2,"title":"x","status":"triaged","created_at":null}"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ReportStatus::Unknown);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("in-progress".parse::<ReportStatus>().unwrap(), ReportStatus::InProgress);
        assert_eq!("Resolved".parse::<ReportStatus>().unwrap(), ReportStatus::Resolved);
        assert!("done".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn test_report_update_skips_unset_fields() {
        let update = ReportUpdate {
            status: Some(ReportStatus::Resolved),
            priority: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"status": "resolved"}));
    }
}
