//! Binary entry point: load configuration, initialize logging, prepare the
//! store, then serve the HTTP API until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use product_code_registry::api;
use product_code_registry::application::product_service::ProductService;
use product_code_registry::infrastructure::config::AppConfig;
use product_code_registry::infrastructure::database_connection::DatabaseConnection;
use product_code_registry::infrastructure::logging::init_logging;
use product_code_registry::infrastructure::seeder::seed_sample_products;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().await?;
    init_logging(&config.logging)?;

    let connection = DatabaseConnection::connect(&config.database).await?;
    connection.migrate().await?;

    let repository = connection.product_repository();
    if config.seed_sample_data {
        seed_sample_products(repository.as_ref()).await?;
    }

    let service = Arc::new(ProductService::new(repository));
    let app = api::router(service, &config.server);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "product code registry listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => warn!(%error, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received");
}
