//! Core library for the legalyze contract-analysis client.
//!
//! - `api`: authenticated REST client with transparent token refresh
//! - `auth`: session credentials, storage backends and route gating
//! - `models`: request/response types for the analysis backend
//! - `config`: persisted client configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{SessionEvent, SessionManager};
pub use config::Config;
