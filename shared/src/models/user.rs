//! User and session models

use serde::{Deserialize, Deserializer, Serialize};

/// Roles recognised by the console
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Inventory,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Inventory => "inventory",
        }
    }

    /// Path of the dashboard this role lands on after login
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

/// Profile of the signed-in user as returned by the authentication endpoint
///
/// The revenue-visibility flag arrives in whatever shape the API chooses
/// (bool, number, string or absent) and is coerced to a strict boolean here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    #[serde(
        rename = "canViewRevenue",
        default,
        deserialize_with = "coerce_bool"
    )]
    pub can_view_revenue: bool,
}

/// A live session: an opaque bearer token paired with the profile it belongs
/// to. The pairing is an invariant; the two are established and cleared
/// together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

fn coerce_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(serde_json::Value::String(s)) => {
            matches!(s.as_str(), "true" | "1")
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(flag: &str) -> String {
        format!(
            r#"{{"id":"u1","username":"amara","role":"admin","canViewRevenue":{}}}"#,
            flag
        )
    }

    #[test]
    fn test_revenue_flag_coerced_from_truthy_values() {
        for truthy in ["true", "1", "\"true\"", "\"1\""] {
            let user: AuthUser = serde_json::from_str(&user_json(truthy)).unwrap();
            assert!(user.can_view_revenue, "expected {} to coerce to true", truthy);
        }
    }

    #[test]
    fn test_revenue_flag_coerced_from_falsy_values() {
        for falsy in ["false", "0", "\"no\"", "null"] {
            let user: AuthUser = serde_json::from_str(&user_json(falsy)).unwrap();
            assert!(!user.can_view_revenue, "expected {} to coerce to false", falsy);
        }
    }

    #[test]
    fn test_revenue_flag_defaults_to_false_when_absent() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":"u2","username":"ravi","role":"inventory"}"#).unwrap();
        assert!(!user.can_view_revenue);
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(UserRole::Admin.dashboard_path(), "/admin/dashboard");
        assert_eq!(UserRole::Inventory.dashboard_path(), "/inventory/dashboard");
    }
}
