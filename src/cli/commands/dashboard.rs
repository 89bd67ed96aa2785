//! Dashboard command implementation.

use anyhow::{Context, Result};
use signals_api::{ApiConfig, RestClient};
use signals_config::load_config;
use signals_core::traits::Gateway;
use signals_core::types::SignalsPage;
use signals_monitor::{Dashboard, DashboardState};
use signals_session::{require_session, Session, SessionStore};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::DashboardArgs;

pub async fn run(args: DashboardArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(config.session.file);
    let session = require_session(&store)?;

    let client = RestClient::new(ApiConfig::new(config.api.base_url))?;

    if args.watch {
        return watch(client, session, config.dashboard.refresh_ms).await;
    }

    let page = client.signals(&session.token).await?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&page)?),
        _ => print!("{}", render_text(&page)),
    }

    Ok(())
}

/// Render a signals page as a plain-text table.
fn render_text(page: &SignalsPage) -> String {
    let mut out = String::new();
    out.push_str("Trading Signals\n");
    out.push_str("═══════════════════════════════════════════════════════════════════════\n");

    if page.signals.is_empty() {
        out.push_str("No signals available\n");
    } else {
        out.push_str(&format!(
            "{:>3}  {:<12} {:<6} {:>10} {:>10} {:>10}  {}\n",
            "#", "Symbol", "Action", "Price", "Target", "Stop Loss", "Time"
        ));
        for (i, signal) in page.signals.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<12} {:<6} {:>10.2} {:>10.2} {:>10.2}  {}\n",
                i + 1,
                signal.symbol,
                signal.action,
                signal.price,
                signal.target,
                signal.stoploss,
                signal.timestamp
            ));
        }
    }

    if page.is_paid {
        out.push('\n');
        out.push_str(&format!(
            "You have access to all {} premium signals!\n",
            page.total
        ));
    } else {
        if let Some(message) = page.upsell() {
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }
        if !page.signals.is_empty() {
            out.push_str(&format!(
                "Showing {} of {} signals. Run `signals subscribe` to unlock all.\n",
                page.signals.len(),
                page.total
            ));
        }
    }

    out
}

/// Interactive dashboard.
///
/// The TUI thread renders shared state; a single worker drains refresh
/// requests, so each 'r' press maps to at most one in-flight request and a
/// failed refresh leaves the previous signals on screen.
async fn watch(client: RestClient, session: Session, refresh_ms: u64) -> Result<()> {
    let state = Arc::new(Mutex::new(DashboardState::new(session.user.email.clone())));

    // First fetch happens before the terminal switches to the alternate screen
    match client.signals(&session.token).await {
        Ok(page) => state.lock().unwrap().apply_page(page),
        Err(e) => state.lock().unwrap().apply_error(e.to_string()),
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let worker_state = Arc::clone(&state);
    let token = session.token.clone();
    let worker = tokio::spawn(async move {
        while rx.recv().await.is_some() {
            let result = client.signals(&token).await;
            let mut state = worker_state.lock().unwrap();
            match result {
                Ok(page) => state.apply_page(page),
                Err(e) => state.apply_error(e.to_string()),
            }
        }
    });

    let ui_state = Arc::clone(&state);
    let refresh_state = Arc::clone(&state);
    let dashboard = Dashboard::new(refresh_ms);
    let ui = tokio::task::spawn_blocking(move || {
        dashboard.run(
            move || ui_state.lock().unwrap().clone(),
            move || {
                refresh_state.lock().unwrap().refreshing = true;
                let _ = tx.send(());
            },
        )
    });

    let res = ui.await?;

    // The refresh sender dropped with the TUI closure; the worker drains any
    // in-flight request and exits
    let _ = worker.await;
    res?;

    info!("Dashboard closed");
    Ok(())
}
