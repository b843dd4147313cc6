//! Database connection handle with lazy, memoized resolution.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, EntityTrait,
    Statement,
};
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::errors::{DataError, DataResult};
use crate::repository::EntityRepository;

/// Wrapper around the SeaORM connection.
///
/// The connection is resolved on the first repository operation and cached
/// for the life of the handle: write-once, read-many, so concurrent first
/// calls race safely on the cell. Until resolution succeeds, every
/// operation reports the underlying configuration or connect failure.
pub struct Database {
    config: DatabaseConfig,
    connection: OnceCell<DatabaseConnection>,
}

impl Database {
    /// Create a handle from configuration. Performs no I/O.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            connection: OnceCell::new(),
        }
    }

    /// Adopt an already-established connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            config: DatabaseConfig::default(),
            connection: OnceCell::new_with(Some(connection)),
        }
    }

    /// Resolve the connection, establishing it on first use.
    ///
    /// Fails with [`DataError::Configuration`] when no database URL is
    /// configured; driver refusals surface as [`DataError::Database`].
    pub async fn connection(&self) -> DataResult<&DatabaseConnection> {
        self.connection
            .get_or_try_init(|| async {
                if self.config.url.is_empty() {
                    return Err(DataError::configuration(
                        "DATABASE_URL is not set and no connection was provided",
                    ));
                }

                let mut options = ConnectOptions::new(self.config.url.clone());
                options
                    .max_connections(self.config.max_connections)
                    .connect_timeout(Duration::from_secs(self.config.connect_timeout_secs));

                let connection = SeaDatabase::connect(options).await?;
                tracing::info!("database connected");
                Ok(connection)
            })
            .await
    }

    /// Build a repository bound to the entity type `E` over this handle.
    pub fn repository<E: EntityTrait>(self: &Arc<Self>) -> EntityRepository<E> {
        EntityRepository::new(Arc::clone(self))
    }

    /// Check connectivity by executing a trivial query.
    pub async fn ping(&self) -> DataResult<()> {
        let connection = self.connection().await?;
        connection
            .execute(Statement::from_string(
                connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
