//! Application state wiring the chat service to its durable store.
//!
//! `AppState` pins the generic `ChatService` to the SQLite keyed store and is
//! shared by both CLI commands and REST API handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parley_core::chat::service::ChatService;
use parley_infra::sqlite::keyed::SqliteKeyedStore;
use parley_infra::sqlite::pool::{default_data_dir, DatabasePool};

/// Concrete type alias for the service generic pinned to the infra store.
pub type ConcreteChatService = ChatService<SqliteKeyedStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state in the default data directory
    /// (`PARLEY_DATA_DIR` or `~/.parley`).
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(Path::new(&default_data_dir())).await
    }

    /// Initialize the application state rooted at an explicit directory:
    /// connect to the database and wire store and service.
    pub async fn init_at(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("parley.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        let store = Arc::new(SqliteKeyedStore::new(db_pool.clone()));
        let chat_service = ChatService::new(store);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            data_dir: data_dir.to_path_buf(),
            db_pool,
        })
    }
}
