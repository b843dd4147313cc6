//! Soft-delete support: mark rows deleted instead of removing them.
//!
//! Entities opt in by implementing [`SoftDeletes`], declaring which nullable
//! timestamp column records the deletion. [`TrashRepository`] then layers
//! trashed-row retrieval, marking, and restore on top of the usual contract.
//! Rows must be marked (not physically removed) for the trashed queries to
//! return anything.

use async_trait::async_trait;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityName, EntityTrait, FromQueryResult, QueryFilter, Value,
};

use super::base::{primary_key_column, PrimaryKeyOf};
use crate::errors::{DataError, DataResult, OptionExt};

/// Declares the deletion-marker column for an entity.
///
/// The column must be a nullable UTC timestamp: NULL means active, a set
/// value records when the row was trashed.
pub trait SoftDeletes: EntityTrait {
    fn deleted_at_column() -> Self::Column;
}

/// Retrieval and lifecycle operations for soft-deleted rows
#[async_trait]
pub trait TrashRepository<E, M>: Send + Sync
where
    E: SoftDeletes + EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Resolve the backing database connection
    async fn conn(&self) -> DataResult<&DatabaseConnection>;

    /// Fetch only trashed rows
    async fn find_deleted(&self) -> DataResult<Vec<M>> {
        let db = self.conn().await?;
        E::find()
            .filter(E::deleted_at_column().is_not_null())
            .all(db)
            .await
            .map_err(Into::into)
    }

    /// Fetch every row, trashed or not
    async fn find_with_deleted(&self) -> DataResult<Vec<M>> {
        let db = self.conn().await?;
        E::find().all(db).await.map_err(Into::into)
    }

    /// Fetch only active rows (excludes trashed)
    async fn find_active(&self) -> DataResult<Vec<M>> {
        let db = self.conn().await?;
        E::find()
            .filter(E::deleted_at_column().is_null())
            .all(db)
            .await
            .map_err(Into::into)
    }

    /// Mark an active row as deleted (sets the marker timestamp).
    ///
    /// Fails with [`DataError::NotFound`] when the id does not resolve to
    /// an active row.
    async fn soft_delete(&self, id: PrimaryKeyOf<E>) -> DataResult<()>
    where
        PrimaryKeyOf<E>: Clone + Send + Into<Value>,
    {
        let pk = primary_key_column::<E>()?;
        let marker = E::deleted_at_column();
        let db = self.conn().await?;

        let result = E::update_many()
            .col_expr(marker, Expr::value(chrono::Utc::now()))
            .filter(Condition::all().add(pk.eq(id)).add(marker.is_null()))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(E::default().table_name()));
        }
        Ok(())
    }

    /// Clear the deletion marker on a trashed row and return it.
    ///
    /// Fails with [`DataError::NotFound`] when the id does not resolve to
    /// a trashed row.
    async fn restore(&self, id: PrimaryKeyOf<E>) -> DataResult<M>
    where
        PrimaryKeyOf<E>: Clone + Send + Into<Value>,
    {
        let pk = primary_key_column::<E>()?;
        let marker = E::deleted_at_column();
        let db = self.conn().await?;

        let result = E::update_many()
            .col_expr(marker, Expr::value(Value::ChronoDateTimeUtc(None)))
            .filter(Condition::all().add(pk.eq(id.clone())).add(marker.is_not_null()))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(E::default().table_name()));
        }

        E::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(E::default().table_name())
    }
}
