use anyhow::{bail, Result};
use legalyze_core::auth::AdminSection;
use legalyze_core::models::{AdminUserUpdate, Analytics, ReportUpdate, SystemSettings};
use legalyze_core::utils::{format_date, format_optional, truncate_string};

use super::output::{print_json, prompt_password};
use super::reports::print_reports;
use super::Context;

#[derive(Debug)]
pub enum AdminTask {
    Dashboard,
    Users,
    User {
        id: i64,
        update: AdminUserUpdate,
        delete: bool,
    },
    Reports,
    Report {
        id: i64,
        update: ReportUpdate,
    },
    Analytics,
    Database,
    Settings(SettingsChange),
    ResetPassword {
        user_id: i64,
    },
}

impl AdminTask {
    pub fn section(&self) -> AdminSection {
        match self {
            AdminTask::Dashboard => AdminSection::Dashboard,
            AdminTask::Users | AdminTask::User { .. } => AdminSection::Users,
            AdminTask::Reports | AdminTask::Report { .. } => AdminSection::Reports,
            AdminTask::Analytics => AdminSection::Analytics,
            AdminTask::Database => AdminSection::Database,
            AdminTask::Settings(_) => AdminSection::Settings,
            AdminTask::ResetPassword { .. } => AdminSection::Passwords,
        }
    }
}

/// Settings fields given on the command line
#[derive(Debug, Default)]
pub struct SettingsChange {
    pub maintenance_mode: Option<bool>,
    pub max_login_attempts: Option<u32>,
    pub session_timeout: Option<u32>,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        self.maintenance_mode.is_none()
            && self.max_login_attempts.is_none()
            && self.session_timeout.is_none()
    }

    /// Overlay the given fields on the current settings
    pub fn apply(&self, settings: &mut SystemSettings) {
        if let Some(on) = self.maintenance_mode {
            settings.system.maintenance_mode = on;
        }
        if let Some(attempts) = self.max_login_attempts {
            settings.system.max_login_attempts = attempts;
        }
        if let Some(minutes) = self.session_timeout {
            settings.system.session_timeout = minutes;
        }
    }
}

pub async fn execute(ctx: &Context, task: AdminTask) -> Result<()> {
    let client = &ctx.client;
    match task {
        AdminTask::Dashboard => {
            let (dashboard, analytics) = client.admin_overview().await?;
            if ctx.json {
                return print_json(&dashboard);
            }
            let stats = &dashboard.stats;
            println!("Users:            {}", stats.total_users);
            println!("Documents:        {}", stats.total_documents);
            println!("Pending reports:  {}", stats.pending_reports);
            println!("Resolved reports: {}", stats.resolved_reports);
            println!(
                "Last 30 days:     {} signups, {} uploads",
                Analytics::total(&analytics.user_registrations),
                Analytics::total(&analytics.document_uploads)
            );
            if !dashboard.recent_users.is_empty() {
                println!("\nRecent users:");
                for user in &dashboard.recent_users {
                    println!(
                        "  {:<20} {}",
                        truncate_string(&user.username, 20),
                        user.created_at.as_deref().map(format_date).unwrap_or_default()
                    );
                }
            }
            if !dashboard.recent_reports.is_empty() {
                println!("\nRecent reports:");
                for report in &dashboard.recent_reports {
                    println!("  #{:<5} {:<11} {}", report.id, report.status, report.title);
                }
            }
        }
        AdminTask::Users => {
            let users = client.admin_users().await?;
            if ctx.json {
                return print_json(&users);
            }
            println!("{:>5}  {:<20}  {:<30}  {:<6}  ACTIVE", "ID", "USERNAME", "EMAIL", "ROLE");
            for user in &users {
                println!(
                    "{:>5}  {:<20}  {:<30}  {:<6}  {}",
                    user.id,
                    truncate_string(&user.username, 20),
                    truncate_string(&user.email, 30),
                    user.account_type,
                    if user.is_active { "yes" } else { "no" }
                );
            }
        }
        AdminTask::User { id, delete: true, .. } => {
            let response = client.delete_admin_user(id).await?;
            println!("{}", format_optional(response.message.as_deref(), "User deleted"));
        }
        AdminTask::User { id, update, .. } if update.is_empty() => {
            let user = client.admin_user(id).await?;
            if ctx.json {
                return print_json(&user);
            }
            println!("{} <{}> {}", user.username, user.email, user.account_type);
            println!(
                "Joined {}, last login {}",
                user.created_at.as_deref().map(format_date).unwrap_or_default(),
                user.last_login.as_deref().map(format_date).unwrap_or_else(|| "never".to_string())
            );
        }
        AdminTask::User { id, update, .. } => {
            let response = client.update_admin_user(id, &update).await?;
            println!("{}", format_optional(response.message.as_deref(), "User updated"));
        }
        AdminTask::Reports => {
            let reports = client.admin_reports().await?;
            if ctx.json {
                return print_json(&reports);
            }
            print_reports(&reports);
        }
        AdminTask::Report { id, update } if update.status.is_none() && update.priority.is_none() => {
            let report = client.admin_report(id).await?;
            if ctx.json {
                return print_json(&report);
            }
            println!("#{} {} [{}]", report.id, report.title, report.status);
            println!("Reported by {}", report.reporter_display());
            if let Some(description) = &report.description {
                println!("\n{description}");
            }
            if let Some(steps) = &report.steps {
                println!("\nSteps to reproduce:\n{steps}");
            }
        }
        AdminTask::Report { id, update } => {
            let response = client.update_admin_report(id, &update).await?;
            println!("{}", format_optional(response.message.as_deref(), "Report updated"));
        }
        AdminTask::Analytics => {
            let analytics = client.admin_analytics().await?;
            if ctx.json {
                return print_json(&analytics);
            }
            println!(
                "Totals: {} users ({} active), {} documents, {} reports",
                analytics.total_users,
                analytics.active_users,
                analytics.total_documents,
                analytics.total_reports
            );
            println!("{:<12}  {:>7}  {:>7}  {:>7}", "DAY", "SIGNUPS", "UPLOADS", "REPORTS");
            for day in &analytics.user_registrations {
                let count_on = |series: &[legalyze_core::models::DailyCount]| {
                    series.iter().find(|d| d.day == day.day).map_or(0, |d| d.count)
                };
                println!(
                    "{:<12}  {:>7}  {:>7}  {:>7}",
                    format_date(&day.day),
                    day.count,
                    count_on(&analytics.document_uploads),
                    count_on(&analytics.report_submissions)
                );
            }
        }
        AdminTask::Database => {
            let tables = client.admin_database().await?;
            if ctx.json {
                return print_json(&tables);
            }
            for table in &tables {
                println!(
                    "{:<16} {:>8} records  updated {}",
                    table.name,
                    table.record_count,
                    table.last_updated.as_deref().map(format_date).unwrap_or_default()
                );
            }
        }
        AdminTask::Settings(change) => {
            let mut settings = client.admin_settings().await?;
            if !change.is_empty() {
                change.apply(&mut settings);
                let response = client.update_admin_settings(&settings).await?;
                if !response.success {
                    bail!(format_optional(response.message.as_deref(), "Settings were not saved"));
                }
            }
            print_json(&settings)?;
        }
        AdminTask::ResetPassword { user_id } => {
            let password = prompt_password("New password: ")?;
            let confirm = prompt_password("Confirm new password: ")?;
            if password != confirm {
                bail!("Passwords do not match");
            }
            let response = client.reset_password(user_id, &password).await?;
            println!("{}", format_optional(response.message.as_deref(), "Password reset"));
        }
    }
    Ok(())
}
