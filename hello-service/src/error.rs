use thiserror::Error;

/// Errors that stop the service process. Request handling itself never
/// fails; a wrong method is an ordinary 400 reply.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}
