//! Account endpoints and the session lifecycle built on them.

use anyhow::{bail, Result};
use tracing::{info, warn};

use super::endpoints::auth as ep;
use super::request::ApiRequest;
use super::ApiClient;
use crate::auth::SessionTokens;
use crate::models::{
    LoginRequest, MessageResponse, PasswordChange, PasswordReset, RegisterResponse, RegisteredUser,
    Registration, TokenPair, UserProfile,
};

impl ApiClient {
    /// Exchange credentials for a token pair, persist it, then fetch and
    /// cache the user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let request = ApiRequest::post(ep::LOGIN)
            .json(&LoginRequest { email, password })?
            .anonymous();
        let tokens: TokenPair = self.send_json(request).await?;

        self.session().establish(&SessionTokens {
            access: tokens.access,
            refresh: tokens.refresh,
        })?;

        let user = match self.current_user().await {
            Ok(user) => user,
            Err(e) => {
                // Don't leave tokens behind without a profile
                self.session().clear()?;
                return Err(e);
            }
        };
        self.session().logged_in(&user);
        Ok(user)
    }

    /// Fetch the authenticated user's profile and overwrite the cached copy
    pub async fn current_user(&self) -> Result<UserProfile> {
        let user: UserProfile = self.get(ep::USER).await?;
        self.session().store_user(&user)?;
        Ok(user)
    }

    /// Re-validate a persisted session at startup.
    ///
    /// Returns `None` when there is no stored token, or when the stored
    /// session turns out to be invalid, in which case it is cleared.
    pub async fn restore(&self) -> Result<Option<UserProfile>> {
        if self.session().access_token()?.is_none() {
            return Ok(None);
        }
        match self.current_user().await {
            Ok(user) => {
                info!(username = %user.username, "Session restored");
                Ok(Some(user))
            }
            Err(e) => {
                warn!(error = %e, "Stored session is invalid, clearing it");
                self.session().clear()?;
                Ok(None)
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.session().logout()
    }

    /// Create an account. The new user still has to log in.
    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser> {
        if let Err(msg) = registration.validate() {
            bail!(msg);
        }
        let request = ApiRequest::post(ep::REGISTER).json(registration)?.anonymous();
        let response: RegisterResponse = self.send_json(request).await?;
        info!(username = %response.user.username, "Account created");
        Ok(response.user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<MessageResponse> {
        if change.new_password != change.confirm_password {
            bail!("New passwords do not match");
        }
        self.post(ep::CHANGE_PASSWORD, change).await
    }

    /// Admin-only: set a new password for another account
    pub async fn reset_password(&self, user_id: i64, new_password: &str) -> Result<MessageResponse> {
        let reset = PasswordReset {
            user_id,
            new_password: new_password.to_string(),
        };
        self.post(ep::RESET_PASSWORD, &reset).await
    }
}
