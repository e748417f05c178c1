//! Data models for the analysis backend.
//!
//! - `UserProfile`, token and signup types
//! - `TextAnalysis`, `AnalysisRecord`, `Document`: analysis results and history
//! - `Report`, `Notification`: issue reports raised by users
//! - Admin types: `Dashboard`, `AdminUser`, `Analytics`, `SystemSettings`

pub mod admin;
pub mod analysis;
pub mod report;
pub mod user;

pub use admin::{
    AdminUser, AdminUserUpdate, Analytics, DailyCount, Dashboard, DashboardStats, DatabaseTable,
    RecentReport, RecentUser, SettingsUpdateResponse, SystemSettings,
};
pub use analysis::{AnalysisRecord, AnalyzeTextRequest, Document, TextAnalysis};
pub use report::{
    NewNotification, NewReport, Notification, Priority, Report, ReportAuthor, ReportKind,
    ReportStatus, ReportUpdate,
};
pub use user::{
    AccountType, LoginRequest, MessageResponse, PasswordChange, PasswordReset, RefreshRequest,
    RefreshResponse, RegisterResponse, RegisteredUser, Registration, TokenPair, UserProfile,
};
