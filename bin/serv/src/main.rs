use std::sync::Arc;

use anyhow::Context;
use lbx_api::{
    config::{ApiConfig, StorageKind},
    state::ApiState,
};
use lbx_db::{FlashcardStore, MemStore, PgStore};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    lbx_api::tracing::init_tracing(config.env);

    // Select the storage backend once, at startup; everything downstream
    // only sees the FlashcardStore trait.
    let store: Arc<dyn FlashcardStore> = match config.storage {
        StorageKind::Memory => {
            tracing::info!("using in-memory flashcard store");
            Arc::new(MemStore::new())
        }
        StorageKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required when STORAGE=postgres")?;
            let pool = lbx_db::create_pool(database_url, 10).await?;
            lbx_db::ensure_db_and_migrate(database_url, &pool).await?;
            tracing::info!("using postgres flashcard store");
            Arc::new(PgStore::new(pool))
        }
    };

    let state = ApiState::new(store, config.env);

    // Create the application router
    let app = lbx_api::router::router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    // Start the server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
