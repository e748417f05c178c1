use anyhow::Result;
use legalyze_core::SessionEvent;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

use super::{account, admin, analysis, reports, Action, Context, Task};

/// Execute the provided action.
///
/// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let ctx = Context::new(&action.globals)?;
    ctx.require(action.task.route())?;

    let mut events = ctx.client.session().subscribe();

    let result = match action.task {
        Task::Login(args) => account::login(&ctx, args).await,
        Task::Logout => account::logout(&ctx),
        Task::WhoAmI => account::whoami(&ctx).await,
        Task::Signup(args) => account::signup(&ctx, args).await,
        Task::ChangePassword => account::change_password(&ctx).await,
        Task::Analyze(input) => analysis::analyze(&ctx, input).await,
        Task::Upload(args) => analysis::upload(&ctx, args).await,
        Task::Documents(id) => analysis::documents(&ctx, id).await,
        Task::History(limit) => analysis::history(&ctx, limit).await,
        Task::Report(task) => reports::execute(&ctx, task).await,
        Task::Admin(task) => admin::execute(&ctx, task).await,
    };

    if session_expired(&mut events) {
        eprintln!("Your session has expired. Log in again with `legalyze login`.");
    }

    result
}

fn session_expired(events: &mut broadcast::Receiver<SessionEvent>) -> bool {
    let mut expired = false;
    loop {
        match events.try_recv() {
            Ok(SessionEvent::Expired) => expired = true,
            Ok(event) => debug!(?event, "Session event"),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalyze_core::SessionManager;

    #[test]
    fn test_session_expired_seen_among_other_events() {
        let session = SessionManager::in_memory();
        let mut events = session.subscribe();
        assert!(!session_expired(&mut events));

        session.expire();
        assert!(session_expired(&mut events));
        assert!(!session_expired(&mut events));
    }
}
