//! Whoami command implementation.

use anyhow::{bail, Context, Result};
use signals_api::{ApiConfig, RestClient};
use signals_config::load_config;
use signals_core::traits::Gateway;
use signals_session::{require_session, SessionStore};
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);
    let session = require_session(&store)?;

    let client = RestClient::new(ApiConfig::new(config.api.base_url))?;
    let user = match client.me(&session.token).await {
        Ok(user) => user,
        Err(e) if e.is_unauthorized() => {
            bail!(
                "{}. Your session may have expired; run `signals login {}`",
                e,
                session.user.email
            );
        }
        Err(e) => return Err(e.into()),
    };

    println!("Email:        {}", user.email);
    println!("User id:      {}", user.id);
    println!("Plan:         {}", if user.is_paid { "Premium" } else { "Free" });
    println!("Member since: {}", user.created_at);

    Ok(())
}
