//! # wanderlogd: wanderlog daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Prepare the data directory and collection documents
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use wanderlog_adapter_http_axum::state::AppState;
use wanderlog_adapter_storage_json::{JsonLandmarkRepository, JsonVisitRepository};
use wanderlog_app::services::landmark_service::LandmarkService;
use wanderlog_app::services::visit_service::VisitService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Storage
    let db = wanderlog_adapter_storage_json::Config {
        data_dir: config.storage.data_dir.clone(),
    }
    .build()
    .await?;

    // Repositories
    let landmark_repo = Arc::new(JsonLandmarkRepository::new(Arc::clone(db.landmarks())));
    let visit_repo = JsonVisitRepository::new(Arc::clone(db.visits()));

    // Services
    let landmark_service = LandmarkService::new(Arc::clone(&landmark_repo));
    let visit_service =
        VisitService::new(visit_repo, landmark_repo).verify_landmark(config.visits.verify_landmark);

    // HTTP
    let state = AppState::new(landmark_service, visit_service);
    let app = wanderlog_adapter_http_axum::router::build(state).layer(CorsLayer::permissive());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        data_dir = %config.storage.data_dir.display(),
        "wanderlogd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("wanderlogd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
