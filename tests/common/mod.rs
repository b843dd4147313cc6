//! Shared fixtures for integration tests.

use std::sync::Arc;

use chrono::Utc;
use repokit::{Database, EntityRepository};
use sea_orm::{ConnectionTrait, DbBackend, Schema, Set};
use uuid::Uuid;

/// Test entity backing the `users` table.
pub mod user {
    use repokit::SoftDeletes;
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub email: String,
        pub name: String,
        pub role: String,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        /// Soft delete timestamp (NULL = active, set = deleted)
        pub deleted_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl SoftDeletes for Entity {
        fn deleted_at_column() -> Self::Column {
            Column::DeletedAt
        }
    }
}

/// Connect to an in-memory SQLite database with the users table created.
pub async fn setup() -> (Arc<Database>, EntityRepository<user::Entity>) {
    // A single pooled connection keeps every query on the same in-memory db.
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let connection = sea_orm::Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");

    let schema = Schema::new(DbBackend::Sqlite);
    let statement = schema.create_table_from_entity(user::Entity);
    connection
        .execute(connection.get_database_backend().build(&statement))
        .await
        .expect("users table should be created");

    let database = Arc::new(Database::from_connection(connection));
    let repo = database.repository();
    (database, repo)
}

/// A user row ready for insertion.
pub fn new_user(email: &str, name: &str) -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        role: Set("user".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
}
