pub mod account;
pub mod admin;
pub mod analysis;
pub mod reports;

mod context;
mod output;
mod run;

use legalyze_core::auth::Route;

use crate::cli::globals::GlobalArgs;

pub use self::context::Context;

#[derive(Debug)]
pub struct Action {
    pub globals: GlobalArgs,
    pub task: Task,
}

#[derive(Debug)]
pub enum Task {
    Login(account::Login),
    Logout,
    WhoAmI,
    Signup(account::Signup),
    ChangePassword,
    Analyze(analysis::Input),
    Upload(analysis::UploadArgs),
    Documents(Option<i64>),
    History(usize),
    Report(reports::ReportTask),
    Admin(admin::AdminTask),
}

impl Task {
    /// Screen of the web client this command corresponds to, used for access checks
    pub fn route(&self) -> Route {
        match self {
            Task::Login(_) => Route::Login,
            Task::Signup(_) => Route::Signup,
            // whoami reports "not logged in" itself
            Task::Logout | Task::WhoAmI => Route::Welcome,
            Task::ChangePassword
            | Task::Analyze(_)
            | Task::Upload(_)
            | Task::Documents(_)
            | Task::History(_)
            | Task::Report(_) => Route::Chat,
            Task::Admin(task) => Route::Admin(task.section()),
        }
    }
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
