use hello_service::{telemetry, ServiceError, Settings};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    let settings = Settings::load()?;
    telemetry::init_tracing(&settings.log_level, settings.log_format)?;

    let addr = settings.address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    hello_service::run_until(listener, shutdown_signal()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
