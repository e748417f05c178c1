use std::sync::Arc;

use anyhow::{bail, Result};
use legalyze_core::auth::{Access, Route, RouteGuard};
use legalyze_core::config::StorageBackend;
use legalyze_core::{ApiClient, Config, SessionManager};
use tracing::debug;

use crate::cli::globals::GlobalArgs;

/// Everything an action needs: the effective config and a client bound to
/// the persisted session.
pub struct Context {
    pub config: Config,
    pub client: ApiClient,
    pub json: bool,
}

impl Context {
    /// # Errors
    /// Returns an error if the config cannot be read or the base URL is invalid.
    pub fn new(globals: &GlobalArgs) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(url) = &globals.api_url {
            config.api_base_url = Some(url.clone());
        }
        if globals.ephemeral {
            config.storage = StorageBackend::Memory;
        }
        debug!(base_url = config.base_url(), storage = ?config.storage, "Using configuration");

        let session = Arc::new(SessionManager::new(config.session_store()?));
        let client = ApiClient::from_config(&config, session)?;

        Ok(Self {
            config,
            client,
            json: globals.json,
        })
    }

    /// Refuse to run a command whose screen the current session may not open.
    ///
    /// # Errors
    /// Returns an error telling the user to log in, or that admin rights are needed.
    pub fn require(&self, route: Route) -> Result<()> {
        let session = self.client.session();
        match RouteGuard::check(route, session) {
            Access::Granted => Ok(()),
            Access::RedirectToLogin if matches!(route, Route::Admin(_)) && session.is_authenticated() => {
                bail!("{route} requires an administrator account")
            }
            Access::RedirectToLogin => bail!("Not logged in. Run `legalyze login` first"),
        }
    }

    /// Persist the email used for the last successful login.
    ///
    /// Reloads the file so command line overrides are not written back.
    pub fn remember_email(&self, email: &str) -> Result<()> {
        let mut stored = Config::load()?;
        if stored.last_email.as_deref() != Some(email) {
            stored.last_email = Some(email.to_string());
            stored.save()?;
        }
        Ok(())
    }
}
