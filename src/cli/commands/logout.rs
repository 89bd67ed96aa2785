//! Logout command implementation.

use anyhow::{Context, Result};
use signals_config::load_config;
use signals_session::SessionStore;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);

    if store.clear()? {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }

    Ok(())
}
