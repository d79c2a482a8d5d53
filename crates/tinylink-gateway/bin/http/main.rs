mod cli;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};
use clap::Parser;
use std::sync::Arc;
use tinylink_core::Shortener;
use tinylink_gateway::{App, AppState};
use tinylink_generator::RandomGenerator;
use tinylink_shortener::ShortenerService;
use tinylink_storage::{InMemoryStore, JsonFileSettings, JsonFileStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        data_file = %config.data_file.display(),
        "starting tinylink"
    );

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::JsonFile => {
            let settings = JsonFileSettings::builder()
                .path(config.data_file)
                .pretty(config.pretty_data_file)
                .build();
            let store = JsonFileStore::open(settings).await;
            Arc::new(ShortenerService::new(store, RandomGenerator::new()))
        }
        StorageBackendArg::InMemory => Arc::new(ShortenerService::new(
            InMemoryStore::new(),
            RandomGenerator::new(),
        )),
    };

    let router = App::router(AppState::new(shortener));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormatArg::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormatArg::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
