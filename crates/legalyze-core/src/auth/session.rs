use std::future::Future;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use super::store::{MemoryStore, SessionStore, StorageKey};
use crate::models::UserProfile;

/// Capacity of the session event channel. Slow subscribers skip old events.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Token pair handed out by the login endpoint.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

/// Session lifecycle notifications.
///
/// `Expired` is the redirect signal: the refresh protocol gave up and the
/// frontend should send the user back to the login entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoggedIn(UserProfile),
    Refreshed,
    LoggedOut,
    Expired,
}

/// Owns the persisted session and its lifecycle: established on login,
/// mutated on refresh, torn down on logout or unrecoverable refresh failure.
///
/// Shared between the API client and its callers behind an `Arc`.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    refresh_lock: Mutex<()>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            refresh_lock: Mutex::new(()),
            events,
        }
    }

    /// Session that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    // ===== Reads =====

    pub fn access_token(&self) -> Result<Option<String>> {
        self.store.get(StorageKey::AccessToken)
    }

    pub fn refresh_token(&self) -> Result<Option<String>> {
        self.store.get(StorageKey::RefreshToken)
    }

    /// Cached profile from the last login or profile fetch.
    /// A corrupt entry is treated as absent.
    pub fn cached_user(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.store.get(StorageKey::User)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable cached user profile");
                Ok(None)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.access_token(), Ok(Some(_)))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.cached_user(), Ok(Some(user)) if user.is_admin())
    }

    // ===== Lifecycle =====

    /// Persist a freshly issued token pair
    pub fn establish(&self, tokens: &SessionTokens) -> Result<()> {
        self.store.set(StorageKey::AccessToken, &tokens.access)?;
        self.store.set(StorageKey::RefreshToken, &tokens.refresh)?;
        debug!("Session tokens stored");
        Ok(())
    }

    /// Overwrite the cached profile
    pub fn store_user(&self, user: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(user).context("Failed to serialize user profile")?;
        self.store.set(StorageKey::User, &json)
    }

    /// Announce a completed login to subscribers
    pub fn logged_in(&self, user: &UserProfile) {
        info!(username = %user.username, "Logged in");
        self.notify(SessionEvent::LoggedIn(user.clone()));
    }

    /// Remove every persisted credential and the cached profile
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    /// User-initiated logout
    pub fn logout(&self) -> Result<()> {
        self.clear()?;
        info!("Logged out");
        self.notify(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Tear the session down after an unrecoverable refresh failure and
    /// signal a redirect to the login entry point.
    pub fn expire(&self) {
        if let Err(e) = self.clear() {
            warn!(error = %e, "Failed to clear expired session");
        }
        warn!("Session expired, redirecting to login");
        self.notify(SessionEvent::Expired);
    }

    /// Obtain a usable access token after a request made with `stale` was
    /// rejected with 401.
    ///
    /// Refreshes are serialized: a caller that waited on another caller's
    /// refresh reuses its result instead of issuing a second refresh call.
    /// `refresh` receives the stored refresh token and returns the new
    /// access token. On failure the session is expired and an error is
    /// returned.
    pub async fn refresh_with<F, Fut>(&self, stale: Option<&str>, refresh: F) -> Result<String>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let _guard = self.refresh_lock.lock().await;

        match (stale, self.access_token()?) {
            (stale, Some(current)) if stale != Some(current.as_str()) => {
                debug!("Access token already replaced, reusing it");
                return Ok(current);
            }
            (Some(_), None) => {
                // Another caller's refresh failed and the session is gone
                return Err(anyhow!("Session is no longer available"));
            }
            _ => {}
        }

        let refresh_token = match self.refresh_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                warn!("No refresh token available");
                self.expire();
                return Err(anyhow!("No refresh token available"));
            }
            Err(e) => {
                warn!(error = %e, "Failed to read refresh token");
                self.expire();
                return Err(e);
            }
        };

        match refresh(refresh_token).await {
            Ok(access) => {
                if let Err(e) = self.store.set(StorageKey::AccessToken, &access) {
                    warn!(error = %e, "Failed to store refreshed access token");
                    self.expire();
                    return Err(e);
                }
                info!("Access token refreshed");
                self.notify(SessionEvent::Refreshed);
                Ok(access)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                self.expire();
                Err(e)
            }
        }
    }
}
