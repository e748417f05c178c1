use clap::{value_parser, Arg, Command};
use legalyze_core::models::{Priority, ReportKind, ReportStatus};

pub(super) fn status_arg() -> Arg {
    Arg::new("status")
        .short('s')
        .long("status")
        .help("pending, in_progress, resolved or closed")
        .value_parser(|s: &str| s.parse::<ReportStatus>())
}

pub(super) fn priority_arg() -> Arg {
    Arg::new("priority")
        .short('p')
        .long("priority")
        .help("low, medium, high or critical")
        .value_parser(|s: &str| s.parse::<Priority>())
}

#[must_use]
pub fn command() -> Command {
    Command::new("report")
        .about("Report an issue to the administrators")
        .subcommand_required(true)
        .subcommand(
            Command::new("new")
                .about("File a new report")
                .arg(Arg::new("title").long("title").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("bug, feature, improvement or other")
                        .default_value("bug")
                        .value_parser(|s: &str| s.parse::<ReportKind>()),
                )
                .arg(priority_arg().default_value("medium"))
                .arg(Arg::new("steps").long("steps").help("Steps to reproduce")),
        )
        .subcommand(Command::new("list").about("List reports"))
        .subcommand(
            Command::new("status")
                .about("Change the status of a report")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(status_arg().default_value("resolved")),
        )
        .subcommand(Command::new("notifications").about("List admin notifications"))
}
