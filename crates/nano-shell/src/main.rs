//! # Lisk Nano Host
//!
//! Entry point of the wallet's host process.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults + environment)
//! 2. Initialize telemetry
//! 3. Start the shell runtime and signal `Ready`
//! 4. Start the auto-updater
//! 5. Forward deep links from stdin until Ctrl+C
//!
//! Without a native toolkit the UI is headless: every event delivered to a
//! window is written to the log.

use std::sync::Arc;

use anyhow::{Context, Result};
use ln_01_event_router::SurfaceReceiver;
use nano_shell::adapters::{DeferringDialog, HeadlessHost, HttpUpdateTransport};
use nano_shell::domain::WorkArea;
use nano_shell::{HostSignal, ShellConfig, ShellRuntime, Updater};
use nano_telemetry::init_telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{info, warn};

/// Log every event the headless UI receives.
fn spawn_ui_logger(mut windows: mpsc::UnboundedReceiver<SurfaceReceiver>) {
    tokio::spawn(async move {
        while let Some(surface) = windows.recv().await {
            tokio::spawn(async move {
                let mut events = surface.into_stream();
                while let Some(event) = events.next().await {
                    info!(
                        event_id = %event.id(),
                        kind = %event.kind(),
                        payload = %event.payload(),
                        "UI received event"
                    );
                }
            });
        }
    });
}

/// Treat each stdin line as a URL opened by the OS.
fn spawn_stdin_links(signals: mpsc::Sender<HostSignal>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    if signals.send(HostSignal::OpenUrl(line)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ShellConfig::from_env();
    let _telemetry = init_telemetry(config.telemetry.clone())
        .await
        .context("Failed to initialize telemetry")?;
    config.validate().context("Invalid shell configuration")?;

    let (host, windows) = HeadlessHost::new(WorkArea::default());
    spawn_ui_logger(windows);

    let (signals_tx, signals_rx) = mpsc::channel(64);
    let runtime = ShellRuntime::new(config.clone(), Arc::new(host), std::env::args().collect());
    let shutdown = runtime.subscribe_shutdown();

    let transport = HttpUpdateTransport::new(
        std::env::temp_dir().join("lisk-nano-updates"),
        signals_tx.clone(),
    )
    .context("Failed to create update client")?;
    let updater = Updater::new(
        config.updater.clone(),
        config.platform,
        Arc::new(transport),
        Arc::new(DeferringDialog),
    );
    tokio::spawn(updater.run(shutdown));

    // The headless UI has nothing to load.
    signals_tx.send(HostSignal::Ready).await?;
    signals_tx.send(HostSignal::DidFinishLoad).await?;
    spawn_stdin_links(signals_tx.clone());

    let ctrl_c_signals = signals_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received");
            let _ = ctrl_c_signals.send(HostSignal::Quit).await;
        }
    });

    info!("Lisk Nano is running. Press Ctrl+C to stop.");
    runtime.run(signals_rx).await?;
    drop(signals_tx);

    info!("Shutdown complete");
    Ok(())
}
