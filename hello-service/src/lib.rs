use std::future::Future;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod greeter;
pub mod telemetry;

pub use crate::config::{LogFormat, Settings};
pub use crate::error::ServiceError;
pub use crate::greeter::{GreeterService, Reply, BAD_REQUEST, GREETING, GREETING_PATH};

pub fn app() -> Router {
    Router::new()
        .route(GREETING_PATH, any(greeter::greet))
        .fallback(greeter::greet)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}
