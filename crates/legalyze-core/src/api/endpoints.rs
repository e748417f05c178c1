//! Endpoint paths, relative to the API base URL.

pub mod auth {
    pub const LOGIN: &str = "token/";
    pub const REFRESH: &str = "token/refresh/";
    pub const REGISTER: &str = "register/";
    pub const USER: &str = "user/";
    pub const RESET_PASSWORD: &str = "user/reset-password/";
    pub const CHANGE_PASSWORD: &str = "user/change-password/";
}

pub mod analysis {
    pub const ANALYZE: &str = "analyze-text/";
    pub const HISTORY: &str = "analyses/";
    pub const DOCUMENTS: &str = "documents/";
    pub const UPLOAD: &str = "documents/upload/";

    pub fn document(id: i64) -> String {
        format!("{}{}/", DOCUMENTS, id)
    }
}

pub mod reports {
    pub const REPORTS: &str = "reports/";
    pub const NOTIFICATIONS: &str = "notifications/";
    pub const NOTIFICATION_LIST: &str = "notifications/list/";

    pub fn report(id: i64) -> String {
        format!("{}{}/", REPORTS, id)
    }
}

pub mod admin {
    pub const DASHBOARD: &str = "admin/dashboard/";
    pub const USERS: &str = "admin/users/";
    pub const REPORTS: &str = "admin/reports/";
    pub const ANALYTICS: &str = "admin/analytics/";
    pub const DATABASE: &str = "admin/database/";
    pub const SETTINGS: &str = "admin/settings/";

    pub fn user(id: i64) -> String {
        format!("{}{}/", USERS, id)
    }

    pub fn report(id: i64) -> String {
        format!("{}{}/", REPORTS, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_paths() {
        assert_eq!(analysis::document(4), "documents/4/");
        assert_eq!(reports::report(9), "reports/9/");
        assert_eq!(admin::user(12), "admin/users/12/");
        assert_eq!(admin::report(3), "admin/reports/3/");
    }
}
