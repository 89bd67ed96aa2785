//! Route guard for protected commands.

use crate::store::{Session, SessionStore};
use signals_core::error::SessionError;

/// Gate a protected operation on an authenticated session.
///
/// Returns the stored session when one is present, otherwise
/// `SessionError::NotAuthenticated`, the terminal equivalent of the
/// redirect-to-login.
pub fn require_session(store: &SessionStore) -> Result<Session, SessionError> {
    match store.load()? {
        Some(session) if !session.token.is_empty() => Ok(session),
        _ => Err(SessionError::NotAuthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signals_core::types::User;

    fn temp_store(name: &str) -> SessionStore {
        let mut path = std::env::temp_dir();
        path.push(format!("signals-guard-{}-{}", std::process::id(), name));
        path.push("session.json");
        let _ = std::fs::remove_file(&path);
        SessionStore::new(path)
    }

    #[test]
    fn test_guard_refuses_without_session() {
        let store = temp_store("refuse");
        assert!(matches!(
            require_session(&store),
            Err(SessionError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_guard_passes_session_through() {
        let store = temp_store("pass");
        store
            .save(&Session {
                token: "tok_abc123".to_string(),
                user: User {
                    id: 1,
                    email: "trader@example.com".to_string(),
                    is_paid: true,
                    created_at: "2024-01-15T10:30:00".to_string(),
                },
            })
            .unwrap();

        let session = require_session(&store).unwrap();
        assert_eq!(session.token, "tok_abc123");
        assert_eq!(session.user.email, "trader@example.com");
    }

    #[test]
    fn test_guard_refuses_after_logout() {
        let store = temp_store("logout");
        store
            .save(&Session {
                token: "tok_abc123".to_string(),
                user: User {
                    id: 1,
                    email: "trader@example.com".to_string(),
                    is_paid: false,
                    created_at: "2024-01-15T10:30:00".to_string(),
                },
            })
            .unwrap();
        store.clear().unwrap();

        assert!(matches!(
            require_session(&store),
            Err(SessionError::NotAuthenticated)
        ));
    }
}
