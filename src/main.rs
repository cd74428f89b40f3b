//! WiFi Signal Monitor - Main Entry Point

use clap::Parser;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wifi_signal_monitor::{
    backend::Nl80211Backend,
    config::{CliArgs, Settings},
    core::{clock::TokioSleeper, monitor},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout carries the signal readings
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wifi_signal_monitor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();
    info!(?args, "Starting WiFi signal monitor");
    let settings = Settings::from(args);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let monitor = monitor::run(
        Nl80211Backend::connect,
        &settings,
        TokioSleeper,
        std::io::stdout(),
        shutdown_rx,
    );
    tokio::pin!(monitor);

    // Wait for the monitor to finish or a shutdown signal
    let result = tokio::select! {
        result = &mut monitor => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            let _ = shutdown_tx.send(true);
            monitor.await
        }
        _ = shutdown_signal() => {
            info!("Received SIGTERM, shutting down gracefully");
            let _ = shutdown_tx.send(true);
            monitor.await
        }
    };

    match result {
        Ok(summary) => {
            info!(
                iterations = summary.iterations,
                records = summary.records,
                errors = summary.errors,
                "Monitor stopped"
            );
            Ok(())
        }
        Err(e) => {
            error!("Monitor failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            error!("Failed to register SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    // On non-Unix platforms, just wait forever
    std::future::pending::<()>().await
}
