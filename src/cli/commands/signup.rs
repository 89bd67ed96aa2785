//! Signup command implementation.

use anyhow::{bail, Context, Result};
use signals_api::{ApiConfig, RestClient};
use signals_config::load_config;
use signals_core::traits::Gateway;
use signals_core::types::User;
use signals_session::{Session, SessionStore};
use std::path::Path;
use tracing::info;

use crate::cli::SignupArgs;

pub async fn run(args: SignupArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);
    let client = RestClient::new(ApiConfig::new(config.api.base_url))?;

    let user = signup_flow(
        &client,
        &store,
        &args.email,
        &args.password,
        args.confirm_password.as_deref(),
    )
    .await?;

    println!("Account created successfully!");
    println!("Logged in as {}", user.email);
    println!();
    println!("Run `signals dashboard` to view trading signals.");

    Ok(())
}

/// Validate the form, register the account, and store the session.
///
/// Nothing is written to the session store unless the backend accepts the
/// signup.
pub(crate) async fn signup_flow(
    gateway: &dyn Gateway,
    store: &SessionStore,
    email: &str,
    password: &str,
    confirm_password: Option<&str>,
) -> Result<User> {
    if let Some(confirm) = confirm_password {
        if confirm != password {
            bail!("Passwords do not match");
        }
    }
    if password.len() < 6 {
        bail!("Password must be at least 6 characters");
    }

    let auth = gateway.signup(email, password).await?;
    let user = auth.user.clone();
    store.save(&Session {
        token: auth.access_token,
        user: auth.user,
    })?;

    info!("Session stored at {:?}", store.path());
    Ok(user)
}
