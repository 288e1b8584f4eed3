//! Login page controller

use std::sync::Arc;

use crate::session::{Route, SessionStore};

/// What the login form does next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Signed in; go to the role's dashboard
    Redirect(Route),
    /// Stay on the form and show this inline
    Error(String),
}

pub struct LoginPage {
    session: Arc<SessionStore>,
}

impl LoginPage {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        if username.trim().is_empty() || password.is_empty() {
            return LoginOutcome::Error("Please fill in all fields".to_string());
        }

        if self.session.login(username, password).await {
            match self.session.current_user() {
                Some(user) => LoginOutcome::Redirect(Route::Dashboard(user.role)),
                None => LoginOutcome::Error("Invalid credentials".to_string()),
            }
        } else {
            LoginOutcome::Error("Invalid credentials".to_string())
        }
    }
}
