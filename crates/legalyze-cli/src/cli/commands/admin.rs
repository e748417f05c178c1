use clap::{value_parser, Arg, ArgAction, Command};
use legalyze_core::models::AccountType;

use super::reports::{priority_arg, status_arg};

fn id_arg() -> Arg {
    Arg::new("id").required(true).value_parser(value_parser!(i64))
}

#[must_use]
pub fn command() -> Command {
    Command::new("admin")
        .about("Administrator dashboard")
        .subcommand_required(true)
        .subcommand(Command::new("dashboard").about("Totals and recent activity"))
        .subcommand(Command::new("users").about("List all accounts"))
        .subcommand(
            Command::new("user")
                .about("Show, update or delete an account")
                .arg(id_arg())
                .arg(
                    Arg::new("role")
                        .long("role")
                        .help("admin or user")
                        .value_parser(|s: &str| s.parse::<AccountType>()),
                )
                .arg(
                    Arg::new("active")
                        .long("active")
                        .help("Enable or disable the account")
                        .value_parser(value_parser!(bool)),
                )
                .arg(
                    Arg::new("delete")
                        .long("delete")
                        .help("Delete the account")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["role", "active"]),
                ),
        )
        .subcommand(Command::new("reports").about("List all reports"))
        .subcommand(
            Command::new("report")
                .about("Show or update a report")
                .arg(id_arg())
                .arg(status_arg())
                .arg(priority_arg()),
        )
        .subcommand(Command::new("analytics").about("Activity over the last 30 days"))
        .subcommand(Command::new("database").about("Table sizes"))
        .subcommand(
            Command::new("settings")
                .about("Show or change system settings")
                .arg(
                    Arg::new("maintenance")
                        .long("maintenance")
                        .help("Turn maintenance mode on or off")
                        .value_parser(value_parser!(bool)),
                )
                .arg(
                    Arg::new("max-login-attempts")
                        .long("max-login-attempts")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("session-timeout")
                        .long("session-timeout")
                        .help("Minutes")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("reset-password")
                .about("Set a new password for an account")
                .arg(Arg::new("user-id").required(true).value_parser(value_parser!(i64))),
        )
}
