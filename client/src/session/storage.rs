//! Durable credential storage
//!
//! The token and the serialized user profile live under fixed keys in a
//! small directory, one file per key. Clearing removes everything the
//! store holds, and it is safe to clear a store that is already empty.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::{AuthUser, Session};

use crate::error::ClientResult;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// File-backed store for the persisted session
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Restore the persisted session, if both keys are present and intact.
    /// A partially written or unreadable store restores nothing.
    pub fn load(&self) -> Option<Session> {
        let token = fs::read_to_string(self.key_path(TOKEN_KEY)).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }

        let raw_user = fs::read_to_string(self.key_path(USER_KEY)).ok()?;
        match serde_json::from_str::<AuthUser>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                tracing::warn!(error = %err, "stored user profile unreadable, ignoring");
                None
            }
        }
    }

    /// Persist the token and user profile together
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(TOKEN_KEY), &session.token)?;
        fs::write(
            self.key_path(USER_KEY),
            serde_json::to_string(&session.user)?,
        )?;
        Ok(())
    }

    /// Remove everything the store holds; a no-op when already empty
    pub fn clear(&self) -> ClientResult<()> {
        for key in [TOKEN_KEY, USER_KEY] {
            match fs::remove_file(self.key_path(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn temp_store(tag: &str) -> CredentialStore {
        let dir = std::env::temp_dir().join(format!(
            "invcon-storage-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        CredentialStore::new(dir)
    }

    fn session() -> Session {
        Session {
            token: "opaque-token".to_string(),
            user: AuthUser {
                id: "u1".to_string(),
                username: "amara".to_string(),
                role: UserRole::Admin,
                can_view_revenue: true,
            },
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        store.save(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = temp_store("empty");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = temp_store("clear");
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // clearing again must not fail
        store.clear().unwrap();
    }

    #[test]
    fn test_partial_store_restores_nothing() {
        let store = temp_store("partial");
        store.save(&session()).unwrap();
        fs::remove_file(store.key_path(USER_KEY)).unwrap();
        assert_eq!(store.load(), None);
    }
}
