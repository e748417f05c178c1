use anyhow::Result;
use legalyze_core::models::{NewReport, Report, ReportStatus};
use legalyze_core::utils::{format_date, truncate_string};

use super::output::print_json;
use super::Context;

#[derive(Debug)]
pub enum ReportTask {
    New(NewReport),
    List,
    Status { id: i64, status: ReportStatus },
    Notifications,
}

pub async fn execute(ctx: &Context, task: ReportTask) -> Result<()> {
    match task {
        ReportTask::New(report) => {
            let created = ctx.client.submit_report(&report).await?;
            if ctx.json {
                return print_json(&created);
            }
            println!("Report #{} submitted", created.id);
        }
        ReportTask::List => {
            let reports = ctx.client.reports().await?;
            if ctx.json {
                return print_json(&reports);
            }
            print_reports(&reports);
        }
        ReportTask::Status { id, status } => {
            let report = ctx.client.update_report_status(id, status).await?;
            if ctx.json {
                return print_json(&report);
            }
            println!("Report #{} is now {}", report.id, report.status);
        }
        ReportTask::Notifications => {
            let notifications = ctx.client.notifications().await?;
            if ctx.json {
                return print_json(&notifications);
            }
            for n in &notifications {
                let marker = if n.is_read { " " } else { "*" };
                println!(
                    "{marker} {:<20}  {}",
                    n.created_at.as_deref().map(format_date).unwrap_or_default(),
                    n.message
                );
            }
        }
    }
    Ok(())
}

pub(super) fn print_reports(reports: &[Report]) {
    if reports.is_empty() {
        println!("No reports");
        return;
    }
    println!(
        "{:>5}  {:<11}  {:<9}  {:<16}  TITLE",
        "ID", "STATUS", "PRIORITY", "REPORTER"
    );
    for report in reports {
        println!(
            "{:>5}  {:<11}  {:<9}  {:<16}  {}",
            report.id,
            report.status,
            report.priority.map(|p| p.to_string()).unwrap_or_default(),
            truncate_string(report.reporter_display(), 16),
            truncate_string(&report.title, 50)
        );
    }
}
