//! Service wiring and the HTTP listener lifecycle.

use std::path::Path;

use anyhow::Context;
use axum::Router;

use stayease_adapter_http_axum::router;
use stayease_adapter_http_axum::state::AppState;
use stayease_adapter_storage_document::{
    BOOKINGS_COLLECTION, DocumentBookingRepository, DocumentCollection, DocumentStoreError,
};
use stayease_app::ports::BookingRepository;
use stayease_app::services::booking_service::BookingService;
use stayease_domain::hotel::Catalog;

use crate::config::Config;

/// Build the full axum application around `service` and the demo catalog.
pub fn app<R>(service: BookingService<R>) -> Router
where
    R: BookingRepository + Send + Sync + 'static,
{
    router::build(AppState::new(service, Catalog::demo()))
}

/// Open the document-backed repository, mirrored to `path` when given.
///
/// # Errors
///
/// Returns [`DocumentStoreError`] if an existing collection file cannot be loaded.
pub async fn open_document_repository(
    path: Option<&Path>,
) -> Result<DocumentBookingRepository, DocumentStoreError> {
    match path {
        Some(path) => {
            let collection = DocumentCollection::open(BOOKINGS_COLLECTION, path).await?;
            Ok(DocumentBookingRepository::new(collection))
        }
        None => {
            tracing::warn!("no document path configured, bookings live in memory only");
            Ok(DocumentBookingRepository::in_memory())
        }
    }
}

/// Serve the API over `repo` until a shutdown signal arrives.
///
/// # Errors
///
/// Fails if startup seeding fails, the listener cannot bind, or the server
/// stops with an IO error.
pub async fn serve<R>(repo: R, config: &Config) -> anyhow::Result<()>
where
    R: BookingRepository + Send + Sync + 'static,
{
    let service = BookingService::new(repo);
    if config.storage.seed_on_start {
        service
            .seed_demo_data()
            .await
            .context("failed to seed demo bookings")?;
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        addr = %bind_addr,
        backend = %config.storage.backend,
        "stayeased listening"
    );

    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;

    tracing::info!("stayeased stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
