use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use votes_engine::VoteEngine;
use votes_repository::{
    InMemoryVotesStore, MIGRATOR, PostgresReputationAccumulator, PostgresTallyCounter,
    PostgresVoteLedger,
};

use crate::config::{Settings, StorageBackend};
use crate::errors::{ConfigError, ServiceError};

/// `Dependencies` holds the components shared by every request handler.
pub struct Dependencies {
    pub engine: Arc<VoteEngine>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance for the configured storage backend.
    ///
    /// For PostgreSQL this opens the connection pool and, unless disabled,
    /// applies the embedded migrations before anything is served.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `ServiceError` if the database cannot be reached or migrated.
    pub async fn new(settings: &Settings) -> Result<Self, ServiceError> {
        match settings.backend {
            StorageBackend::Postgres => {
                let database_url = settings
                    .database_url
                    .as_deref()
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;

                let pool = PgPoolOptions::new()
                    .max_connections(settings.max_connections)
                    .connect(database_url)
                    .await?;
                info!(max_connections = settings.max_connections, "Connected to PostgreSQL");

                if settings.run_migrations {
                    MIGRATOR.run(&pool).await?;
                    info!("Database migrations applied");
                }

                let engine = VoteEngine::new(
                    Arc::new(PostgresVoteLedger::new(pool.clone())),
                    Arc::new(PostgresTallyCounter::new(pool.clone())),
                    Arc::new(PostgresReputationAccumulator::new(pool)),
                );
                Ok(Self {
                    engine: Arc::new(engine),
                })
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage; votes are lost on restart");
                Ok(Self::in_memory(Arc::new(InMemoryVotesStore::new())))
            }
        }
    }

    /// Wires the engine to a single in-memory store acting as ledger, tally
    /// counter and reputation accumulator.
    pub fn in_memory(store: Arc<InMemoryVotesStore>) -> Self {
        let engine = VoteEngine::new(store.clone(), store.clone(), store);
        Self {
            engine: Arc::new(engine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn settings(backend: StorageBackend, database_url: Option<&str>) -> Settings {
        Settings {
            backend,
            database_url: database_url.map(str::to_string),
            max_connections: 1,
            run_migrations: false,
            server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            allowed_origins: vec!["*".to_string()],
        }
    }

    #[tokio::test]
    async fn test_memory_backend_serves_reads() {
        let deps = Dependencies::new(&settings(StorageBackend::Memory, None))
            .await
            .unwrap();

        let missing = uuid::Uuid::new_v4();
        assert!(deps.engine.get_score(missing).await.is_err());
    }

    #[tokio::test]
    async fn test_postgres_backend_without_url() {
        let result = Dependencies::new(&settings(StorageBackend::Postgres, None)).await;
        assert!(matches!(
            result,
            Err(ServiceError::Config(ConfigError::Missing("DATABASE_URL")))
        ));
    }

    #[tokio::test]
    async fn test_postgres_backend_invalid_database_url() {
        let result =
            Dependencies::new(&settings(StorageBackend::Postgres, Some("invalid-database-url")))
                .await;
        assert!(matches!(result, Err(ServiceError::Database(_))));
    }
}
