//! Catena Catalog API
//!
//! Management interface for catalog components and their supplier and
//! product associations.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    serve, Router,
};
use catena_database::{initialize_database, CatalogStore, PgCatalogStore};
use catena_utils::{init_logging, AppConfig};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod handlers;
mod links;
mod routes;
mod service;
mod validation;

#[cfg(test)]
mod testing;

use links::LinkService;
use service::ComponentService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Catena Catalog API");

    // Initialize database
    let db_config = catena_database::DatabaseConfig {
        postgres_url: config.database.postgres_url.clone(),
        max_connections: config.database.max_connections,
        connection_timeout: Duration::from_secs(config.database.connection_timeout_seconds),
    };
    let pool = initialize_database(&db_config).await?;
    info!("Database connection established");

    let store: Arc<dyn CatalogStore> = Arc::new(PgCatalogStore::new(pool));
    let app = create_app(store, &config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Catalog API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(store: Arc<dyn CatalogStore>, config: &AppConfig) -> Router {
    Router::new()
        .merge(routes::create_api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size)),
        )
        .with_state(AppState {
            components: ComponentService::new(store.clone()),
            links: LinkService::new(store),
        })
}

#[derive(Clone)]
pub struct AppState {
    pub components: ComponentService,
    pub links: LinkService,
}
