//! Billing status command implementation.

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
    let status = match client.billing_status(&session.token).await {
        Ok(status) => status,
        Err(e) if e.is_unauthorized() => {
            bail!(
                "{}. Your session may have expired; run `signals login {}`",
                e,
                session.user.email
            );
        }
        Err(e) => return Err(e.into()),
    };

    println!("Subscription status for {}", status.email);
    println!(
        "  Plan: {}",
        if status.is_paid { "Premium" } else { "Free" }
    );
    if let Some(id) = &status.customer_id {
        println!("  Customer id: {}", id);
    }
    if let Some(id) = &status.subscription_id {
        println!("  Subscription id: {}", id);
    }

    if !status.is_paid {
        println!();
        println!("Run `signals subscribe` to unlock all signals.");
    }

    Ok(())
}
