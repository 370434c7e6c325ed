//! Kohalabel Server - barcode and spine label printing for Koha catalogs

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kohalabel_server::{
    api,
    config::AppConfig,
    repository::{DbRouter, Repository, SchemaOwner},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("kohalabel_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Kohalabel Server v{}", env!("CARGO_PKG_VERSION"));

    // Application database pool (users, sessions)
    let app_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to application database");

    // Koha catalog pool. Read-only: this service never writes to it.
    let catalog_pool = PgPoolOptions::new()
        .max_connections(config.catalog_database.max_connections)
        .min_connections(config.catalog_database.min_connections)
        .connect(&config.catalog_database.url)
        .await
        .expect("Failed to connect to catalog database");

    tracing::info!("Connected to application and catalog databases");

    let router = DbRouter::new(catalog_pool, app_pool);

    // Migrations touch the application schema only; the catalog schema is
    // owned by Koha and must never be migrated from here.
    if router.allow_migrate(SchemaOwner::App) {
        sqlx::migrate!("./migrations")
            .run(router.pool_for(SchemaOwner::App))
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Application database migrations completed");
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(router);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Labels
        .route("/labels", post(api::labels::generate_labels))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
