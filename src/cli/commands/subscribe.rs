//! Subscribe command implementation.

use anyhow::{Context, Result};
use signals_api::{ApiConfig, RestClient};
use signals_config::load_config;
use signals_core::traits::Gateway;
use signals_session::{require_session, SessionStore};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::cli::SubscribeArgs;

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_POLLS: u32 = 60;

pub async fn run(args: SubscribeArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);
    let session = require_session(&store)?;

    let client = RestClient::new(ApiConfig::new(config.api.base_url))?;
    let checkout = client.create_checkout(&session.token).await?;

    println!("Checkout session created.");
    println!();
    println!("Complete your payment in the browser:");
    println!("  {}", checkout.checkout_url);

    if !args.wait {
        println!();
        println!("Run `signals status` after paying to confirm your subscription.");
        return Ok(());
    }

    println!();
    println!("Waiting for payment confirmation (Ctrl-C to stop)...");

    for attempt in 1..=MAX_POLLS {
        tokio::time::sleep(POLL_INTERVAL).await;

        let status = client.billing_status(&session.token).await?;
        if status.is_paid {
            info!("Checkout {} completed after {} polls", checkout.session_id, attempt);
            println!();
            println!("Payment successful! Your subscription is now active.");
            println!("You have access to all premium trading signals.");
            return Ok(());
        }
    }

    println!();
    println!("Checkout not completed. No charges were made if you cancelled.");
    println!("You can still access limited signals or try subscribing again anytime.");

    Ok(())
}
