//! Client-side route gating based on session and role state.

use std::fmt;

use tracing::debug;

use super::SessionManager;

/// Admin dashboard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Users,
    Reports,
    Analytics,
    Database,
    Passwords,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Login,
    Signup,
    /// Analysis workspace: upload, paste, history, reporting issues
    Chat,
    Admin(AdminSection),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Chat => "/dashboard",
            Route::Admin(section) => match section {
                AdminSection::Dashboard => "/admin-dashboard",
                AdminSection::Users => "/admin-dashboard/users",
                AdminSection::Reports => "/admin-dashboard/reports",
                AdminSection::Analytics => "/admin-dashboard/analytics",
                AdminSection::Database => "/admin-dashboard/database",
                AdminSection::Passwords => "/admin-dashboard/passwords",
                AdminSection::Settings => "/admin-dashboard/settings",
            },
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Route::Welcome | Route::Login | Route::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Protected routes need a stored access token; admin routes need a
    /// cached profile with the admin role.
    pub fn check(route: Route, session: &SessionManager) -> Access {
        let access = match route {
            r if r.is_public() => Access::Granted,
            Route::Admin(_) if session.is_admin() => Access::Granted,
            Route::Admin(_) => Access::RedirectToLogin,
            _ if session.is_authenticated() => Access::Granted,
            _ => Access::RedirectToLogin,
        };
        debug!(route = %route, ?access, "Route check");
        access
    }
}
