use sf_auth::{CredentialHasher, HashParams};
use sf_server::error::Result as ServerErrorResult;
use sf_server::{AppState, build_router, logger};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = sf_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = sf_config::Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Before any other logging
    logger::initialize(
        config.logging.level,
        log_file_path,
        config.logging.colored,
    )?;

    info!("Starting sf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = sf_db::open_pool(&database_path, config.database.max_connections).await?;

    // Convert config types for sf-auth
    let hasher = CredentialHasher::new(HashParams {
        memory_kib: config.security.hash_memory_kib,
        iterations: config.security.hash_iterations,
        parallelism: config.security.hash_parallelism,
    })?;

    let app_state = AppState {
        pool: pool.clone(),
        hasher: Arc::new(hasher),
        limits: config.validation.field_limits(),
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Port 0 is resolved by the OS
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    match sf_config::PortFileInfo::write(actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (CLI auto-discovery may not work): {}",
            e
        ),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;

    if let Err(e) = sf_config::PortFileInfo::remove() {
        warn!("Failed to remove port file: {}", e);
    }

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await
        }
    }
}
