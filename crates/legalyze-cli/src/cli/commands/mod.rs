mod account;
mod admin;
mod analysis;
mod reports;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_API_URL: &str = "api-url";
pub const ARG_EPHEMERAL: &str = "ephemeral";
pub const ARG_JSON: &str = "json";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("legalyze")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the analysis API")
                .env("LEGALYZE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_EPHEMERAL)
                .long("ephemeral")
                .help("Keep the session in memory only")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new(ARG_JSON)
                .long("json")
                .help("Print raw JSON output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommands(account::subcommands())
        .subcommands(analysis::subcommands())
        .subcommand(reports::command())
        .subcommand(admin::command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "legalyze");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
        command.debug_assert();
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let matches = new().get_matches_from(vec![
            "legalyze",
            "documents",
            "--api-url",
            "https://legal.example.com/api/",
            "--ephemeral",
            "-vv",
        ]);

        assert_eq!(
            matches.get_one::<String>(ARG_API_URL).cloned(),
            Some("https://legal.example.com/api/".to_string())
        );
        assert!(matches.get_flag(ARG_EPHEMERAL));
        assert!(!matches.get_flag(ARG_JSON));
        assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));
        assert_eq!(matches.subcommand_name(), Some("documents"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(new().try_get_matches_from(vec!["legalyze"]).is_err());
    }

    #[test]
    fn test_analyze_text_conflicts_with_file() {
        let result = new().try_get_matches_from(vec![
            "legalyze",
            "analyze",
            "some clause",
            "--file",
            "lease.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_priority_is_validated() {
        let result = new().try_get_matches_from(vec![
            "legalyze", "report", "new", "--title", "t", "--description", "d", "--priority", "urgent",
        ]);
        assert!(result.is_err());
    }
}
