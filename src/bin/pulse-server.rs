// ABOUTME: Pulse HTTP API server binary
// ABOUTME: Loads configuration, initializes logging, database, and catalogs, then serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pulse Server Binary
//!
//! Starts the Pulse fitness and nutrition API.

use anyhow::Result;
use clap::Parser;
use pulse_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pulse-server")]
#[command(about = "Pulse - fitness metrics, diet planning, and progress tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Pulse server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::initialize(config).await?);
    info!("Database and catalogs ready");

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
