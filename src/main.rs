//! Trading signals client CLI.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use signals_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    setup_logging(log_level, cli.json_logs);

    // Execute command
    match cli.command {
        Commands::Signup(args) => cli::commands::signup::run(args, &cli.config).await,
        Commands::Login(args) => cli::commands::login::run(args, &cli.config).await,
        Commands::Logout => cli::commands::logout::run(&cli.config).await,
        Commands::Whoami => cli::commands::whoami::run(&cli.config).await,
        Commands::Dashboard(args) => cli::commands::dashboard::run(args, &cli.config).await,
        Commands::Subscribe(args) => cli::commands::subscribe::run(args, &cli.config).await,
        Commands::Status => cli::commands::status::run(&cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
