use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::INFO),
        2 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parse arguments, install logging and build the action to run
///
/// # Errors
///
/// Returns an error if the arguments cannot be turned into an action
pub fn start() -> Result<(Action, WorkerGuard)> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(commands::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    let guard = telemetry::init(get_verbosity_level(verbosity));

    let action = dispatch::handler(&matches)?;

    Ok((action, guard))
}
