//! Axum router and server setup.
//! Used by: main.

use std::net::SocketAddr;

use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::handlers;

/// Every method on every path answers with the liveness message.
pub fn build_router() -> Router {
    Router::new()
        .route("/", any(handlers::health::online))
        .fallback(handlers::health::online)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, build_router()).await?;
    Ok(())
}

pub async fn run(addr: SocketAddr) -> Result<()> {
    tracing::info!(%addr, "starting healthcheck server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    tracing::info!(%addr, "listening");
    serve(listener).await
}

/// Runs until the server stops. Errors are logged, never propagated.
pub async fn healthcheck(addr: SocketAddr) {
    if let Err(e) = run(addr).await {
        tracing::error!(%addr, error = %e, "healthcheck server stopped");
    }
}
