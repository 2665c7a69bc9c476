//! Client and service for the calculate-sum endpoint.
//!
//! [`SumRequester`] posts an [`InputPair`] to `POST /calculate_sum` and writes
//! `Sum: <result>` into a [`ResultSink`]. [`build_app`] is the matching
//! service: it parses both operands as integers and answers with their sum.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod requester;

use axum::Router;
use tracing::info;

pub use config::AppConfig;
pub use display::{render_result, MemoryDisplay, ResultSink, StdoutDisplay};
pub use error::{OperandError, Result, SumError};
pub use requester::{InputPair, RequesterConfig, SumOutcome, SumRequester};

pub fn build_app() -> Router {
    api::router()
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "sum service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down sum service");
    }
}
