//! REST client for the contract-analysis backend.
//!
//! Every request made through `ApiClient` is decorated with the stored
//! bearer token. A 401 triggers one token refresh and one resubmission
//! of the original request; if that refresh fails the session is
//! expired and subscribers are told to send the user back to login.

pub mod admin;
pub mod analysis;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod reports;
pub mod request;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{ApiRequest, Attempt, Body, Upload};
