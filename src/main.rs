//! taskdesk server entry point.
//!
//! Starts the Axum HTTP server and the event subscriber loop.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use taskdesk::api;
use taskdesk::app_state::AppState;
use taskdesk::config::ServerConfig;
use taskdesk::domain::{EntityStore, EventBus, UserStore};
use taskdesk::service::{ProjectService, UserService, notifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting taskdesk");

    // Build domain layer
    let user_store = Arc::new(UserStore::new());
    let project_store = Arc::new(EntityStore::new());
    let (event_bus, subscription) = EventBus::bounded(config.event_bus_capacity);

    // The bus needs a running subscriber before the first request can
    // publish, otherwise publishers stall once the buffer fills.
    tokio::spawn(notifier::run(subscription));

    // Build service layer
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_store),
        event_bus.clone(),
        config.default_profile_picture.clone(),
    ));
    let project_service = Arc::new(ProjectService::new(user_store, project_store, event_bus));

    // Build application state
    let app_state = AppState {
        user_service,
        project_service,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
