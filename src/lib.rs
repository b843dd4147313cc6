//! repokit - A generic repository abstraction over SeaORM
//!
//! This crate provides a reusable data-access foundation: repository traits
//! with default CRUD implementations, criteria-based filtering, pagination,
//! and soft-delete retrieval. Every operation is a thin delegation to
//! SeaORM's query builder; connection pooling, transactions, and schema
//! management remain the ORM's business.
//!
//! # Architecture Layers
//!
//! - **config**: Database settings and tuning constants
//! - **db**: Connection handle with lazy, memoized resolution
//! - **errors**: Centralized error handling
//! - **repository**: Contract traits and the generic `EntityRepository`
//! - **types**: Shared types (criteria, pagination)
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use repokit::{Database, DatabaseConfig, EntityRepository, ReadRepository};
//!
//! let database = Arc::new(Database::new(DatabaseConfig::from_env()));
//! let users: EntityRepository<user::Entity> = database.repository();
//! let everyone = users.find_all().await?;
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod repository;
pub mod types;

// Re-export commonly used types at crate root
pub use config::DatabaseConfig;
pub use db::Database;
pub use errors::{DataError, DataResult, OptionExt};
pub use repository::{
    CrudRepository, DeleteRepository, EntityRepository, PrimaryKeyOf, ReadRepository, SoftDeletes,
    TrashRepository, WriteRepository,
};
pub use types::{Criteria, Paginated, PaginationMeta, PaginationParams};
