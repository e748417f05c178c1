//! Authentication module for managing session credentials.
//!
//! This module provides:
//! - `SessionManager`: owns the session lifecycle (login, refresh, logout)
//!   and serializes token refreshes
//! - `SessionStore`: persistent key-value storage for credentials, with
//!   file, OS keychain and in-memory backends
//! - `RouteGuard`: decides whether a route is reachable for the current session

pub mod guard;
pub mod session;
pub mod store;

pub use guard::{Access, AdminSection, Route, RouteGuard};
pub use session::{SessionEvent, SessionManager, SessionTokens};
pub use store::{FileStore, KeyringStore, MemoryStore, SessionStore, StorageKey};
