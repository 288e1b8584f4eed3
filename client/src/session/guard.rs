//! Route guard
//!
//! A pure function of the session snapshot: unauthenticated visitors go to
//! the login screen, authenticated visitors with the wrong role go to their
//! own dashboard, everyone else gets the guarded content.

use shared::models::{Session, UserRole};

/// Navigation targets the client can be sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard(UserRole),
    InwardList,
    OutwardList,
    AdminInward,
    AdminOutward,
    AdminDiscrepancies,
    DiscrepancyDetail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard(role) => role.dashboard_path(),
            Route::InwardList => "/inventory/inward".to_string(),
            Route::OutwardList => "/inventory/outward".to_string(),
            Route::AdminInward => "/admin/inward".to_string(),
            Route::AdminOutward => "/admin/outward".to_string(),
            Route::AdminDiscrepancies => "/admin/discrepancies".to_string(),
            Route::DiscrepancyDetail(id) => format!("/admin/discrepancies/{}", id),
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Grant,
    Redirect(Route),
}

/// Decide whether a session may enter a route requiring `required`
pub fn check_route(required: UserRole, session: Option<&Session>) -> RouteAccess {
    match session {
        None => RouteAccess::Redirect(Route::Login),
        Some(session) if session.user.role != required => {
            RouteAccess::Redirect(Route::Dashboard(session.user.role))
        }
        Some(_) => RouteAccess::Grant,
    }
}
