//! Administrator dashboard endpoints.

use anyhow::{bail, Result};

use super::endpoints::admin as ep;
use super::ApiClient;
use crate::models::{
    AdminUser, AdminUserUpdate, Analytics, Dashboard, DatabaseTable, MessageResponse, Report,
    ReportUpdate, SettingsUpdateResponse, SystemSettings,
};

impl ApiClient {
    pub async fn admin_dashboard(&self) -> Result<Dashboard> {
        self.get(ep::DASHBOARD).await
    }

    /// Dashboard and analytics fetched concurrently
    pub async fn admin_overview(&self) -> Result<(Dashboard, Analytics)> {
        futures::try_join!(self.admin_dashboard(), self.admin_analytics())
    }

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>> {
        self.get(ep::USERS).await
    }

    pub async fn admin_user(&self, id: i64) -> Result<AdminUser> {
        self.get(&ep::user(id)).await
    }

    pub async fn update_admin_user(&self, id: i64, update: &AdminUserUpdate) -> Result<MessageResponse> {
        if update.is_empty() {
            bail!("Nothing to update");
        }
        self.patch(&ep::user(id), update).await
    }

    pub async fn delete_admin_user(&self, id: i64) -> Result<MessageResponse> {
        self.delete(&ep::user(id)).await
    }

    pub async fn admin_reports(&self) -> Result<Vec<Report>> {
        self.get(ep::REPORTS).await
    }

    pub async fn admin_report(&self, id: i64) -> Result<Report> {
        self.get(&ep::report(id)).await
    }

    pub async fn update_admin_report(&self, id: i64, update: &ReportUpdate) -> Result<MessageResponse> {
        if update.status.is_none() && update.priority.is_none() {
            bail!("Nothing to update");
        }
        self.patch(&ep::report(id), update).await
    }

    pub async fn admin_analytics(&self) -> Result<Analytics> {
        self.get(ep::ANALYTICS).await
    }

    pub async fn admin_database(&self) -> Result<Vec<DatabaseTable>> {
        self.get(ep::DATABASE).await
    }

    pub async fn admin_settings(&self) -> Result<SystemSettings> {
        self.get(ep::SETTINGS).await
    }

    pub async fn update_admin_settings(&self, settings: &SystemSettings) -> Result<SettingsUpdateResponse> {
        self.post(ep::SETTINGS, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::auth::{SessionManager, SessionTokens};
    use crate::models::{AccountType, ReportStatus};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        let session = Arc::new(SessionManager::in_memory());
        session
            .establish(&SessionTokens {
                access: "admin-token".to_string(),
                refresh: "r1".to_string(),
            })
            .unwrap();
        ApiClient::new(&format!("{}/api", server.uri()), session).unwrap()
    }

    #[tokio::test]
    async fn overview_fetches_dashboard_and_analytics() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/dashboard/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stats": {"total_users": 3, "total_documents": 8, "pending_reports": 1, "resolved_reports": 2},
                "recent_users": [],
                "recent_reports": []
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/admin/analytics/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_registrations": [{"day": "2024-05-01", "count": 2}],
                "document_uploads": [],
                "report_submissions": [],
                "total_users": 3,
                "total_documents": 8,
                "total_reports": 3,
                "active_users": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (dashboard, analytics) = client(&server).admin_overview().await?;
        assert_eq!(dashboard.stats.total_documents, 8);
        assert_eq!(Analytics::total(&analytics.user_registrations), 2);
        Ok(())
    }

    #[tokio::test]
    async fn non_admin_gets_access_denied_without_refresh() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/users/"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "detail": "You do not have permission to perform this action."
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "x"})))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server).admin_users().await.unwrap_err();
        assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::AccessDenied(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_user_sends_only_set_fields() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/admin/users/5/"))
            .and(body_json(json!({"account_type": "admin"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "User updated successfully"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let update = AdminUserUpdate {
            account_type: Some(AccountType::Admin),
            is_active: None,
        };
        let response = client.update_admin_user(5, &update).await?;
        assert_eq!(response.message.as_deref(), Some("User updated successfully"));

        assert!(client.update_admin_user(5, &AdminUserUpdate::default()).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn delete_user_and_update_report() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/users/9/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "User deleted successfully"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/admin/reports/4/"))
            .and(body_json(json!({"status": "resolved"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Report updated successfully"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        client.delete_admin_user(9).await?;
        let update = ReportUpdate {
            status: Some(ReportStatus::Resolved),
            priority: None,
        };
        client.update_admin_report(4, &update).await?;
        Ok(())
    }

    #[tokio::test]
    async fn settings_round_trip_through_backend() -> Result<()> {
        let server = MockServer::start().await;
        let settings = json!({
            "system": {"maintenanceMode": false, "maxLoginAttempts": 5, "sessionTimeout": 30},
            "security": {"passwordMinLength": 8, "requireSpecialChars": true, "requireNumbers": true, "requireUppercase": true},
            "notifications": {"emailNotifications": true, "reportNotifications": true, "userNotifications": true}
        });
        Mock::given(method("GET"))
            .and(path("/api/admin/settings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings.clone()))
            .mount(&server)
            .await;
        let mut updated = settings.clone();
        updated["system"]["maintenanceMode"] = json!(true);
        Mock::given(method("POST"))
            .and(path("/api/admin/settings/"))
            .and(body_json(updated))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Settings updated successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let mut current = client.admin_settings().await?;
        current.system.maintenance_mode = true;
        let response = client.update_admin_settings(&current).await?;
        assert!(response.success);
        Ok(())
    }
}
