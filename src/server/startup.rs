//! Process bootstrap: logging, configuration, store connection, serving and shutdown.

use std::{net::SocketAddr, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, database::DatabaseGateway, error::AppError, router::router,
    scheduler::rate_limit_sweep, state::AppState,
};

/// Time allowed for in-flight requests and cleanup once a shutdown signal arrives.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this crate and
/// noisy dependencies are held at `warn`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "venturelens={},tower_http=warn,sea_orm=warn",
            config.log_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Makes every panic fatal: the panic is logged and the process exits with status 1.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Unrecoverable panic: {}", info);
        std::process::exit(1);
    }));
}

/// Resolves when SIGINT or SIGTERM arrives, then arms a forced exit.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }

    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_GRACE).await;
        tracing::error!("Graceful shutdown timed out, forcing exit");
        std::process::exit(1);
    });
}

/// Runs the server until a shutdown signal arrives.
///
/// # Returns
/// - `Ok(())` - Server stopped cleanly
/// - `Err(AppError)` - Database connection, scheduler, bind or serve failure
pub async fn run(config: Config) -> Result<(), AppError> {
    let gateway = DatabaseGateway::new(&config);
    gateway.connect().await?;

    let address = config.bind_address();
    let environment = config.environment;
    let state = AppState::new(gateway.clone(), config);

    let mut scheduler = rate_limit_sweep::start_scheduler(state.rate_limits.clone()).await?;
    let app = router(state)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, %environment, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    scheduler.shutdown().await?;
    gateway.disconnect().await?;
    tracing::info!("Server stopped");

    Ok(())
}
