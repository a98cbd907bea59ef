use address_book::addresses::service::AddressService;
use address_book::config::{Config, init_logging};
use address_book::server::router;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level);

    // 1. Storage layer:
    let store = config.open_store()?;
    let service = Arc::new(AddressService::new(store, config.distance_model));

    tracing::info!(
        "Database {} ready ({} addresses, {:?} distance)",
        config.database.display(),
        service.count().await?,
        service.distance_model()
    );

    // 2. HTTP Router:
    let app = router(service);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
