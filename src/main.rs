//! Shared Movie Watchlist Backend
//!
//! REST backend for shared movie lists with SQLite persistence and an Overseerr
//! proxy for movie metadata.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod overseerr;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use overseerr::OverseerrClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub overseerr: Arc<OverseerrClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting watchlist backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Overseerr URL: {}", config.overseerr_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));
    tracing::info!("Database migrations applied");

    let http = reqwest::Client::builder()
        .user_agent(concat!("watchlist-backend/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let overseerr = Arc::new(OverseerrClient::new(
        http,
        config.overseerr_url.clone(),
        config.overseerr_api_key.clone(),
    ));

    // Create application state
    let state = AppState {
        repo: repo.clone(),
        overseerr,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(600))
        .allow_credentials(true);

    let api_routes = Router::new()
        .route("/health", get(health_check))
        // Lists
        .route("/lists", get(api::list_lists).post(api::create_list))
        .route(
            "/lists/{id}",
            get(api::get_list)
                .put(api::update_list)
                .delete(api::delete_list),
        )
        // Movies within lists
        .route(
            "/lists/{id}/movies",
            get(api::list_movies_in_list).post(api::add_movie_to_list),
        )
        .route(
            "/lists/{id}/movies/{movie_id}",
            axum::routing::delete(api::remove_movie_from_list).patch(api::update_movie_in_list),
        )
        // Movie catalog
        .route("/movies", get(api::list_movies).post(api::upsert_movie))
        .route(
            "/movies/{id}",
            get(api::get_movie).delete(api::delete_movie),
        )
        // Overseerr proxy
        .route("/overseerr/search", get(api::search))
        .route("/overseerr/discover", get(api::discover))
        .route("/overseerr/movie/{id}", get(api::movie_details))
        .route("/overseerr/trending", get(api::trending))
        .route("/overseerr/popular", get(api::popular));

    // Health check outside the API prefix as well
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
