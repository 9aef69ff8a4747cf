use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{MemoryStore, OpenRouterClient};
use application::GenerationService;
use config::ServerConfig;

/// Generation service wired to the in-memory store
pub type AppGenerationService = GenerationService<MemoryStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub generation: Arc<AppGenerationService>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, provider: Arc<dyn playground::CompletionProvider>) -> Self {
        Self {
            generation: Arc::new(GenerationService::new(store.clone(), provider)),
            store,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Prompt Playground API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full HTTP surface: API routes, docs, health, CORS and request tracing
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::generate::router())
        .merge(routes::prompts::router())
        .merge(routes::responses::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧪 Prompt Playground API initializing...");

    let config = ServerConfig::from_env()?;
    tracing::info!("🔗 Completion API: {}", config.upstream.base_url);

    let store = Arc::new(MemoryStore::new());
    let provider = Arc::new(OpenRouterClient::new(config.upstream.clone()));
    let state = AppState::new(store, provider);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Prompt Playground API listening on {}", config.addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
