use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use legalyze_core::models::{
    AccountType, AdminUserUpdate, NewReport, Priority, ReportKind, ReportStatus, ReportUpdate,
};

use crate::cli::actions::{
    account::{Login, Signup},
    admin::{AdminTask, SettingsChange},
    analysis::{Input, UploadArgs},
    reports::ReportTask,
    Action, Task,
};
use crate::cli::commands::{ARG_API_URL, ARG_EPHEMERAL, ARG_JSON};
use crate::cli::globals::GlobalArgs;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs {
        api_url: matches.get_one::<String>(ARG_API_URL).cloned(),
        ephemeral: matches.get_flag(ARG_EPHEMERAL),
        json: matches.get_flag(ARG_JSON),
    };

    let task = match matches.subcommand() {
        Some(("login", sub)) => Task::Login(Login {
            email: sub.get_one::<String>("email").cloned(),
            password: sub.get_one::<String>("password").cloned(),
        }),
        Some(("logout", _)) => Task::Logout,
        Some(("whoami", _)) => Task::WhoAmI,
        Some(("signup", sub)) => Task::Signup(Signup {
            username: required(sub, "username")?,
            email: required(sub, "email")?,
            account_type: if sub.get_flag("admin") {
                AccountType::Admin
            } else {
                AccountType::User
            },
        }),
        Some(("passwd", _)) => Task::ChangePassword,
        Some(("analyze", sub)) => Task::Analyze(
            match (sub.get_one::<String>("text"), sub.get_one::<PathBuf>("file")) {
                (Some(text), _) => Input::Text(text.clone()),
                (None, Some(path)) => Input::File(path.clone()),
                (None, None) => Input::Stdin,
            },
        ),
        Some(("upload", sub)) => Task::Upload(UploadArgs {
            file: sub
                .get_one::<PathBuf>("file")
                .cloned()
                .context("missing required argument: <file>")?,
            title: sub.get_one::<String>("title").cloned(),
        }),
        Some(("documents", sub)) => Task::Documents(sub.get_one::<i64>("id").copied()),
        Some(("history", sub)) => Task::History(sub.get_one::<usize>("limit").copied().unwrap_or(20)),
        Some(("report", sub)) => Task::Report(report_task(sub)?),
        Some(("admin", sub)) => Task::Admin(admin_task(sub)?),
        Some((name, _)) => bail!("unknown command: {name}"),
        None => bail!("no command given, see --help"),
    };

    Ok(Action { globals, task })
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn report_task(matches: &ArgMatches) -> Result<ReportTask> {
    Ok(match matches.subcommand() {
        Some(("new", sub)) => ReportTask::New(NewReport {
            title: required(sub, "title")?,
            description: required(sub, "description")?,
            kind: sub.get_one::<ReportKind>("type").copied().unwrap_or(ReportKind::Bug),
            priority: sub.get_one::<Priority>("priority").copied().unwrap_or(Priority::Medium),
            steps: sub.get_one::<String>("steps").cloned(),
        }),
        Some(("list", _)) => ReportTask::List,
        Some(("status", sub)) => ReportTask::Status {
            id: sub.get_one::<i64>("id").copied().context("missing report id")?,
            status: sub
                .get_one::<ReportStatus>("status")
                .copied()
                .unwrap_or(ReportStatus::Resolved),
        },
        Some(("notifications", _)) => ReportTask::Notifications,
        Some((name, _)) => bail!("unknown report command: {name}"),
        None => bail!("missing report command, see `legalyze report --help`"),
    })
}

fn admin_task(matches: &ArgMatches) -> Result<AdminTask> {
    Ok(match matches.subcommand() {
        Some(("dashboard", _)) => AdminTask::Dashboard,
        Some(("users", _)) => AdminTask::Users,
        Some(("user", sub)) => AdminTask::User {
            id: sub.get_one::<i64>("id").copied().context("missing user id")?,
            update: AdminUserUpdate {
                account_type: sub.get_one::<AccountType>("role").copied(),
                is_active: sub.get_one::<bool>("active").copied(),
            },
            delete: sub.get_flag("delete"),
        },
        Some(("reports", _)) => AdminTask::Reports,
        Some(("report", sub)) => AdminTask::Report {
            id: sub.get_one::<i64>("id").copied().context("missing report id")?,
            update: ReportUpdate {
                status: sub.get_one::<ReportStatus>("status").copied(),
                priority: sub.get_one::<Priority>("priority").copied(),
            },
        },
        Some(("analytics", _)) => AdminTask::Analytics,
        Some(("database", _)) => AdminTask::Database,
        Some(("settings", sub)) => AdminTask::Settings(SettingsChange {
            maintenance_mode: sub.get_one::<bool>("maintenance").copied(),
            max_login_attempts: sub.get_one::<u32>("max-login-attempts").copied(),
            session_timeout: sub.get_one::<u32>("session-timeout").copied(),
        }),
        Some(("reset-password", sub)) => AdminTask::ResetPassword {
            user_id: sub.get_one::<i64>("user-id").copied().context("missing user id")?,
        },
        Some((name, _)) => bail!("unknown admin command: {name}"),
        None => bail!("missing admin command, see `legalyze admin --help`"),
    })
}
