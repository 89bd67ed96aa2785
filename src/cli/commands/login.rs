//! Login command implementation.

use anyhow::{Context, Result};
use signals_api::{ApiConfig, RestClient};
use signals_config::load_config;
use signals_core::traits::Gateway;
use signals_core::types::User;
use signals_session::{Session, SessionStore};
use std::path::Path;
use tracing::info;

use crate::cli::LoginArgs;

pub async fn run(args: LoginArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);
    let client = RestClient::new(ApiConfig::new(config.api.base_url))?;

    let user = login_flow(&client, &store, &args.email, &args.password).await?;

    println!("Login successful!");
    println!("Welcome back, {}", user.email);
    println!();
    println!("Run `signals dashboard` to view trading signals.");

    Ok(())
}

/// Authenticate and store the session.
///
/// Nothing is written to the session store unless the backend accepts the
/// credentials.
pub(crate) async fn login_flow(
    gateway: &dyn Gateway,
    store: &SessionStore,
    email: &str,
    password: &str,
) -> Result<User> {
    let auth = gateway.login(email, password).await?;
    let user = auth.user.clone();
    store.save(&Session {
        token: auth.access_token,
        user: auth.user,
    })?;

    info!("Session stored at {:?}", store.path());
    Ok(user)
}
