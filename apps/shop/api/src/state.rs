//! Shared application state.
//!
//! Holds the configuration, the selected storage and the token signer. Cloning
//! is cheap: the database connection is a pooled handle.

use axum_helpers::JwtAuth;
use database::postgres::{self, DatabaseConnection};
use migration::Migrator;
use tracing::info;

use crate::config::{Config, StorageBackend};

/// The backing store every repository is built on.
#[derive(Clone)]
pub enum Storage {
    Memory,
    Postgres(DatabaseConnection),
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub jwt_auth: JwtAuth,
}

impl AppState {
    /// Open the configured storage. PostgreSQL is migrated before use.
    pub async fn connect(config: Config) -> eyre::Result<Self> {
        let storage = match (config.storage, config.database.clone()) {
            (StorageBackend::Postgres, Some(database)) => {
                let db = postgres::connect_from_config(database)
                    .await
                    .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
                postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
                Storage::Postgres(db)
            }
            (StorageBackend::Postgres, None) => {
                eyre::bail!("Postgres storage selected but DATABASE_URL is not configured")
            }
            (StorageBackend::Memory, _) => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Storage::Memory
            }
        };

        Ok(Self::new(config, storage))
    }

    pub fn new(config: Config, storage: Storage) -> Self {
        let jwt_auth = JwtAuth::new(&config.jwt);
        Self {
            config,
            storage,
            jwt_auth,
        }
    }

    pub async fn close(self) {
        if let Storage::Postgres(db) = self.storage {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    }
}
