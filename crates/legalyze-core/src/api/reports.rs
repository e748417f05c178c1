//! Issue reports and admin notifications.

use anyhow::Result;
use tracing::warn;

use super::endpoints::reports as ep;
use super::ApiClient;
use crate::models::{NewNotification, NewReport, Notification, Report, ReportStatus, ReportUpdate};

/// Notification type raised for every new report
const NEW_REPORT_NOTIFICATION: &str = "new_report";

impl ApiClient {
    /// File an issue report, then notify admins about it.
    /// The notification is best effort; its failure does not fail the report.
    pub async fn submit_report(&self, report: &NewReport) -> Result<Report> {
        let created: Report = self.post(ep::REPORTS, report).await?;

        let notification = NewNotification {
            kind: NEW_REPORT_NOTIFICATION.to_string(),
            title: report.title.clone(),
            report_id: Some(created.id),
            priority: report.priority,
        };
        if let Err(e) = self.create_notification(&notification).await {
            warn!(report_id = created.id, error = %e, "Failed to notify admins about report");
        }

        Ok(created)
    }

    pub async fn reports(&self) -> Result<Vec<Report>> {
        self.get(ep::REPORTS).await
    }

    pub async fn update_report_status(&self, id: i64, status: ReportStatus) -> Result<Report> {
        let update = ReportUpdate {
            status: Some(status),
            priority: None,
        };
        self.patch(&ep::report(id), &update).await
    }

    pub async fn create_notification(&self, notification: &NewNotification) -> Result<Notification> {
        self.post(ep::NOTIFICATIONS, notification).await
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        self.get(ep::NOTIFICATION_LIST).await
    }
}
