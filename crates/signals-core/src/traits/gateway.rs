//! Gateway trait definition.

use crate::error::ApiError;
use crate::types::{AuthResponse, BillingStatus, Checkout, SignalsPage, User};
use async_trait::async_trait;

/// Trait for backend gateways.
///
/// A gateway issues exactly one request per call and never retries or caches;
/// callers own all loading/disabled state around the call.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Register a new account.
    ///
    /// # Returns
    /// The access token and the freshly created user profile
    async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// Authenticate an existing account.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;

    /// Fetch the profile behind a bearer token.
    async fn me(&self, token: &str) -> Result<User, ApiError>;

    /// Fetch the signals page for the authenticated user.
    ///
    /// The backend decides how many signals the user may see; the client
    /// renders at most what is returned.
    async fn signals(&self, token: &str) -> Result<SignalsPage, ApiError>;

    /// Create a hosted checkout session for the authenticated user.
    async fn create_checkout(&self, token: &str) -> Result<Checkout, ApiError>;

    /// Fetch the subscription state for the authenticated user.
    async fn billing_status(&self, token: &str) -> Result<BillingStatus, ApiError>;

    /// Get the gateway name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    // Gateway tests live with the callers, which substitute stub implementations.
}
