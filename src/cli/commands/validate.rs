//! Validate configuration command.

use anyhow::Result;
use signals_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("API base URL: {}", config.api.base_url);
            println!("Session file: {:?}", config.session.file);
            println!("Dashboard refresh: {}ms", config.dashboard.refresh_ms);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
