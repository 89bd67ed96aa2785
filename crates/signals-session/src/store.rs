//! Persistent session store.

use serde::{Deserialize, Serialize};
use signals_core::error::SessionError;
use signals_core::types::User;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A stored session: the bearer token plus the cached user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// File-backed session store.
///
/// The token is opaque: the store only checks for its presence and never
/// validates, refreshes, or expires it. Written on login/signup, removed on
/// logout, read by every guarded command.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a session, replacing any existing one.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        fs::write(&self.path, json)?;

        debug!("Session saved for {}", session.user.email);
        Ok(())
    }

    /// Load the stored session, if one exists.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&json).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        Ok(Some(session))
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("Session cleared");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Get the stored token, if any.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.map(|s| s.token).filter(|t| !t.is_empty()))
    }

    /// Get the cached user profile, if any.
    pub fn user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.load()?.map(|s| s.user))
    }

    /// Whether a token is stored.
    ///
    /// A missing, unreadable, or corrupt session file counts as
    /// unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("signals-store-{}-{}", std::process::id(), name));
        path.push("session.json");
        let _ = fs::remove_file(&path);
        SessionStore::new(path)
    }

    fn session() -> Session {
        Session {
            token: "tok_abc123".to_string(),
            user: User {
                id: 1,
                email: "trader@example.com".to_string(),
                is_paid: false,
                created_at: "2024-01-15T10:30:00".to_string(),
            },
        }
    }

    #[test]
    fn test_unauthenticated_when_empty() {
        let store = temp_store("empty");
        assert!(!store.is_authenticated());
        assert!(store.load().unwrap().is_none());
        assert!(store.token().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = temp_store("roundtrip");
        store.save(&session()).unwrap();

        assert!(store.is_authenticated());
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "tok_abc123");
        assert_eq!(loaded.user.email, "trader@example.com");
        assert_eq!(store.user().unwrap().unwrap(), loaded.user);
    }

    #[test]
    fn test_clear_destroys_session() {
        let store = temp_store("clear");
        store.save(&session()).unwrap();
        assert!(store.is_authenticated());

        assert!(store.clear().unwrap());
        assert!(!store.is_authenticated());

        // Idempotent
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_empty_token_counts_as_unauthenticated() {
        let store = temp_store("empty-token");
        let mut s = session();
        s.token = String::new();
        store.save(&s).unwrap();

        assert!(!store.is_authenticated());
        assert!(store.token().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(SessionError::Corrupt(_))));
        assert!(!store.is_authenticated());
    }
}
