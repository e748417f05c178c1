//! Types for the administrator dashboard endpoints.

use serde::{Deserialize, Serialize};

use super::{AccountType, ReportStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_documents: u64,
    pub pending_reports: u64,
    pub resolved_reports: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RecentUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RecentReport {
    pub id: i64,
    pub title: String,
    pub status: ReportStatus,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Dashboard {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_users: Vec<RecentUser>,
    #[serde(default)]
    pub recent_reports: Vec<RecentReport>,
}

/// Account as seen by the user-management screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

/// Partial update for an account. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl AdminUserUpdate {
    pub fn is_empty(&self) -> bool {
        self.account_type.is_none() && self.is_active.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DailyCount {
    pub day: String,
    pub count: u64,
}

/// Seven-day activity figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Analytics {
    #[serde(default)]
    pub user_registrations: Vec<DailyCount>,
    #[serde(default)]
    pub document_uploads: Vec<DailyCount>,
    #[serde(default)]
    pub report_submissions: Vec<DailyCount>,
    pub total_users: u64,
    pub total_documents: u64,
    pub total_reports: u64,
    pub active_users: u64,
}

impl Analytics {
    /// Sum of a daily series
    pub fn total(series: &[DailyCount]) -> u64 {
        series.iter().map(|d| d.count).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub record_count: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SystemSection {
    pub maintenance_mode: bool,
    pub max_login_attempts: u32,
    pub session_timeout: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SecuritySection {
    pub password_min_length: u32,
    pub require_special_chars: bool,
    pub require_numbers: bool,
    pub require_uppercase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct NotificationSection {
    pub email_notifications: bool,
    pub report_notifications: bool,
    pub user_notifications: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SystemSettings {
    pub system: SystemSection,
    pub security: SecuritySection,
    pub notifications: NotificationSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard() {
        let json = r#"{
            "stats": {"total_users": 12, "total_documents": 40, "pending_reports": 3, "resolved_reports": 9},
            "recent_users": [{"id": 1, "username": "ada", "email": "ada@example.com", "created_at": "2024-05-01T10:00:00Z"}],
            "recent_reports": [{"id": 4, "title": "Crash", "status": "resolved", "created_at": null}]
        }"#;
        let dashboard: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.stats.pending_reports, 3);
        assert_eq!(dashboard.recent_users[0].username, "ada");
        assert_eq!(dashboard.recent_reports[0].status, ReportStatus::Resolved);
    }

    #[test]
    fn test_parse_settings_camel_case() {
        let json = r#"{
            "system": {"maintenanceMode": false, "maxLoginAttempts": 5, "sessionTimeout": 30},
            "security": {"passwordMinLength": 8, "requireSpecialChars": true, "requireNumbers": true, "requireUppercase": true},
            "notifications": {"emailNotifications": true, "reportNotifications": true, "userNotifications": false}
        }"#;
        let settings: SystemSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.system.max_login_attempts, 5);
        assert!(!settings.notifications.user_notifications);

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["security"]["passwordMinLength"], 8);
    }

    #[test]
    fn test_analytics_total() {
        let series = vec![
            DailyCount { day: "2024-05-01".to_string(), count: 2 },
            DailyCount { day: "2024-05-02".to_string(), count: 5 },
        ];
        assert_eq!(Analytics::total(&series), 7);
        assert_eq!(Analytics::total(&[]), 0);
    }

    #[test]
    fn test_parse_database_table() {
        let json = r#"[{"name":"Report","description":"report","recordCount":14,"lastUpdated":null}]"#;
        let tables: Vec<DatabaseTable> = serde_json::from_str(json).unwrap();
        assert_eq!(tables[0].record_count, 14);
    }
}
