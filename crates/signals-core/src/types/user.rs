//! User profile and authentication response types.

use serde::{Deserialize, Serialize};

/// User profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_paid: bool,
    /// Account creation time, preformatted by the backend
    pub created_at: String,
}

/// Successful login or signup response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token; never inspected client-side
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
