use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role flag carried on every account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Admin => "admin",
            AccountType::User => "user",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(AccountType::Admin),
            "user" => Ok(AccountType::User),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

/// Snapshot of the authenticated identity, cached alongside the tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
}

fn default_true() -> bool {
    true
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.account_type == AccountType::Admin
    }

    /// Name shown in prompts and listings
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Credentials posted to the token endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Token pair returned by the token endpoint. Extra identity fields the
/// backend adds are ignored; the profile is fetched separately.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Signup form. Validated locally before it is sent.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub account_type: AccountType,
}

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LENGTH: usize = 8;

impl Registration {
    /// Check the form the same way the signup view does before submitting.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Please fill in all required fields".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ));
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub account_type: AccountType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub user: RegisteredUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordReset {
    pub user_id: i64,
    pub new_password: String,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
