//! Configuration management.

mod settings;

pub use settings::{
    ApiSettings, AppConfig, AppSettings, DashboardSettings, LoggingConfig, SessionSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional: every section carries defaults, so the client runs
/// with no configuration at all. Environment variables use the `SIGNALS`
/// prefix with `__` as the section separator, e.g. `SIGNALS__API__BASE_URL`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SIGNALS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
