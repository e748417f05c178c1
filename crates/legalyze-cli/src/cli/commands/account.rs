use clap::{Arg, ArgAction, Command};

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new("login")
            .about("Log in and store the session")
            .arg(
                Arg::new("email")
                    .short('e')
                    .long("email")
                    .help("Account email (defaults to the last one used)"),
            )
            .arg(
                Arg::new("password")
                    .long("password")
                    .help("Password; prompted for when omitted")
                    .env("LEGALYZE_PASSWORD")
                    .hide_env_values(true),
            ),
        Command::new("logout").about("Forget the stored session"),
        Command::new("whoami").about("Show the logged-in account"),
        Command::new("signup")
            .about("Create a new account")
            .arg(Arg::new("username").short('u').long("username").required(true))
            .arg(Arg::new("email").short('e').long("email").required(true))
            .arg(
                Arg::new("admin")
                    .long("admin")
                    .help("Request an administrator account")
                    .action(ArgAction::SetTrue),
            ),
        Command::new("passwd").about("Change your password"),
    ]
}
