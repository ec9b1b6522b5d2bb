pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use exercise_core::{ExerciseGenerator, InMemoryRepetitionMemory};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::error::ErrorResponse;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub generator: Arc<ExerciseGenerator>,
}

impl AppState {
    /// State with a fresh, empty repetition memory.
    pub fn new(db: Database) -> Self {
        let memory = Arc::new(InMemoryRepetitionMemory::new());
        Self {
            db: Arc::new(db),
            generator: Arc::new(ExerciseGenerator::new(memory)),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let app = build_router(AppState::new(db));

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Content routes
        .route("/content/categories", get(routes::content::categories))
        .route("/content/items/:category_id", get(routes::content::items))
        // Exercise routes
        .route("/exercise/generate", post(routes::exercise::generate))
        .route("/exercise/validate", post(routes::exercise::validate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Turn a handler panic into the generic internal error response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "Request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
