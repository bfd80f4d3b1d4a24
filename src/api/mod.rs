//! HTTP layer exposing the symptom analysis pipeline.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{data::DatasetSummary, triage::Triage};

#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<Triage>,
    pub datasets: Arc<DatasetSummary>,
}

impl AppState {
    pub fn new(triage: Triage, datasets: DatasetSummary) -> Self {
        Self {
            triage: Arc::new(triage),
            datasets: Arc::new(datasets),
        }
    }
}

/// Build the application router; unknown paths answer with a JSON 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .route("/api/datasets", get(routes::datasets))
        .fallback(routes::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn serve(state: AppState, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    info!(%addr, "serving dx-assistant API");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
