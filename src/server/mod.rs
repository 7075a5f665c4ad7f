// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP front end.
//!
//! | Method | Path        | Body                       | Returns                     |
//! |--------|-------------|----------------------------|-----------------------------|
//! | GET    | `/`         |                            | HTML page                   |
//! | GET    | `/healthz`  |                            | `{"ok": true, ...}`         |
//! | POST   | `/optimize` | `{"title", "description"}` | [`OptimizationReport`]      |
//! | POST   | `/enhance`  | `{"prompt"}`               | `{"enhanced_prompt": "..."}`|
//!
//! Validation failures answer 400, unreadable bodies keep axum's rejection
//! status (400, 413, 415, 422), model failures answer 502. All of them carry
//! `{"error": ..., "kind": ...}`.

mod error;

pub use error::{ApiError, MISSING_PRODUCT_FIELDS, MISSING_PROMPT};

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::enhance::Enhancer;
use crate::llm::CompletionProvider;
use crate::optimize::{OptimizationReport, Optimizer, ProductInput};

const INDEX_HTML: &str = include_str!("page.html");

pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
        }
    }
}

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    optimizer: Optimizer<dyn CompletionProvider>,
    enhancer: Enhancer<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            optimizer: Optimizer::new(Arc::clone(&provider)),
            enhancer: Enhancer::new(provider),
        }
    }
}

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct EnhanceRequest {
    #[serde(default, deserialize_with = "crate::optimize::null_as_empty")]
    prompt: String,
}

#[derive(Serialize)]
struct EnhanceResponse {
    enhanced_prompt: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health))
        .route("/optimize", post(optimize))
        .route("/enhance", post(enhance))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: "seomark",
    })
}

async fn optimize(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<OptimizationReport>, ApiError> {
    let Json(input) = payload?;
    let report = state.optimizer.optimize(&input).await?;
    Ok(Json(report))
}

async fn enhance(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, ApiError> {
    let Json(body) = payload?;
    let enhanced_prompt = state.enhancer.enhance(&body.prompt).await?;
    Ok(Json(EnhanceResponse { enhanced_prompt }))
}
