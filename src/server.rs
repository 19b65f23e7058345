// ABOUTME: HTTP server assembly and lifecycle for the Pulse API
// ABOUTME: Merges domain routers, applies tracing, CORS, and body limits, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::AppError;
use crate::middleware::{make_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{
    CalculatorRoutes, CatalogRoutes, ChatRoutes, HealthRoutes, PlanRoutes, ProfileRoutes,
    ProgressRoutes,
};
use anyhow::{Context, Result};
use axum::{http::Uri, response::Response, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, Span};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(CalculatorRoutes::routes(Arc::clone(&resources)))
        .merge(CatalogRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)))
        .merge(ChatRoutes::routes(resources))
        .fallback(not_found_handler)
        .layer(RequestBodyLimitLayer::new(limits::MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    debug!(latency_ms = latency.as_millis(), "Request completed");
                }),
        )
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!(
        "{}:{}",
        resources.config.http_host, resources.config.http_port
    );
    let app = build_router(resources);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
