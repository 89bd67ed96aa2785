//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signals")]
#[command(author, version, about = "Subscription-gated trading signals client")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and start a session
    Signup(SignupArgs),
    /// Authenticate and start a session
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the authenticated user's profile
    Whoami,
    /// Fetch and display trading signals
    Dashboard(DashboardArgs),
    /// Create a checkout session for the premium subscription
    Subscribe(SubscribeArgs),
    /// Show subscription status
    Status,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct SignupArgs {
    /// Account email address
    pub email: String,

    /// Account password (minimum 6 characters)
    #[arg(short, long, env = "SIGNALS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Password confirmation; must match the password
    #[arg(long, env = "SIGNALS_PASSWORD_CONFIRM", hide_env_values = true)]
    pub confirm_password: Option<String>,
}

#[derive(clap::Args)]
pub struct LoginArgs {
    /// Account email address
    pub email: String,

    /// Account password
    #[arg(short, long, env = "SIGNALS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(clap::Args)]
pub struct DashboardArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Open the interactive terminal dashboard
    #[arg(short, long)]
    pub watch: bool,
}

#[derive(clap::Args)]
pub struct SubscribeArgs {
    /// Poll billing status until the checkout completes
    #[arg(long)]
    pub wait: bool,
}
