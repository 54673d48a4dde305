//! Maester server binary
//!
//! Loads configuration, seeds the in-memory store from the configured JSON
//! file when it exists, and serves the character API until shutdown.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use maester::config::ServerConfig;
use maester::core::CharacterService;
use maester::store::{InMemoryCharacterStore, seed};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load()?;

    let store = Arc::new(InMemoryCharacterStore::new());

    let seed_path = Path::new(&config.seed_path);
    if seed_path.exists() {
        seed::load_from_file(store.as_ref(), seed_path).await?;
    } else {
        tracing::warn!("Seed file '{}' not found, starting empty", config.seed_path);
    }

    let service = CharacterService::new(store, config.text_match);

    maester::server::serve(service, &config.bind_addr).await
}
