//! Base repository traits with default CRUD implementations.
//!
//! The traits are split by concern so repositories can compose read, write,
//! and delete capabilities as needed. Default method bodies delegate
//! directly to SeaORM's query builder; an implementor only supplies the
//! backing connection through `conn`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityName, EntityTrait,
    FromQueryResult, IntoActiveModel, Iterable, PaginatorTrait, PartialModelTrait,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, Value,
};

use crate::errors::{DataError, DataResult, OptionExt};
use crate::types::{Criteria, Paginated, PaginationParams};

/// Shorthand for an entity's primary-key value type
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Read operations (queries only, no mutation)
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Resolve the backing database connection.
    ///
    /// Called at the start of every operation; an unresolvable binding
    /// surfaces as [`DataError::Configuration`] before any query runs.
    async fn conn(&self) -> DataResult<&DatabaseConnection>;

    /// Fetch every row
    async fn find_all(&self) -> DataResult<Vec<M>> {
        let db = self.conn().await?;
        E::find().all(db).await.map_err(Into::into)
    }

    /// Fetch every row, projected to the partial model `P`
    async fn find_all_partial<P>(&self) -> DataResult<Vec<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
    {
        let db = self.conn().await?;
        E::find()
            .into_partial_model::<P>()
            .all(db)
            .await
            .map_err(Into::into)
    }

    /// Fetch rows matching every criterion (logical AND, equality only).
    ///
    /// Empty criteria match everything.
    async fn find_all_where(&self, criteria: Criteria<E>) -> DataResult<Vec<M>> {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        E::find().filter(condition).all(db).await.map_err(Into::into)
    }

    /// Filtered fetch, projected to the partial model `P`
    async fn find_all_where_partial<P>(&self, criteria: Criteria<E>) -> DataResult<Vec<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
    {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        E::find()
            .filter(condition)
            .into_partial_model::<P>()
            .all(db)
            .await
            .map_err(Into::into)
    }

    /// Find a row by primary key
    async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> DataResult<Option<M>>
    where
        PrimaryKeyOf<E>: Clone + Send,
    {
        let db = self.conn().await?;
        E::find_by_id(id).one(db).await.map_err(Into::into)
    }

    /// Find a row by primary key, projected to the partial model `P`
    async fn find_by_id_partial<P>(&self, id: PrimaryKeyOf<E>) -> DataResult<Option<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
        PrimaryKeyOf<E>: Clone + Send,
    {
        let db = self.conn().await?;
        E::find_by_id(id)
            .into_partial_model::<P>()
            .one(db)
            .await
            .map_err(Into::into)
    }

    /// Fetch the first row matching every criterion
    async fn find_one_where(&self, criteria: Criteria<E>) -> DataResult<Option<M>> {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        E::find().filter(condition).one(db).await.map_err(Into::into)
    }

    /// First-match lookup, projected to the partial model `P`
    async fn find_one_where_partial<P>(&self, criteria: Criteria<E>) -> DataResult<Option<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
    {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        E::find()
            .filter(condition)
            .into_partial_model::<P>()
            .one(db)
            .await
            .map_err(Into::into)
    }

    /// Fetch one page of all rows
    async fn find_paginated(&self, params: &PaginationParams) -> DataResult<Paginated<M>> {
        let db = self.conn().await?;
        let paginator = E::find().paginate(db, params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page_index()).await?;
        Ok(Paginated::new(data, params.page, params.limit(), total))
    }

    /// Fetch one page of rows matching every criterion
    async fn find_paginated_where(
        &self,
        criteria: Criteria<E>,
        params: &PaginationParams,
    ) -> DataResult<Paginated<M>> {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        let paginator = E::find().filter(condition).paginate(db, params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page_index()).await?;
        Ok(Paginated::new(data, params.page, params.limit(), total))
    }

    /// Fetch one page of all rows, projected to the partial model `P`
    async fn find_paginated_partial<P>(&self, params: &PaginationParams) -> DataResult<Paginated<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
    {
        let db = self.conn().await?;
        let paginator = E::find().into_partial_model::<P>().paginate(db, params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page_index()).await?;
        Ok(Paginated::new(data, params.page, params.limit(), total))
    }

    /// Paginated filtered fetch, projected to the partial model `P`
    async fn find_paginated_where_partial<P>(
        &self,
        criteria: Criteria<E>,
        params: &PaginationParams,
    ) -> DataResult<Paginated<P>>
    where
        P: PartialModelTrait + FromQueryResult + Send + Sync,
    {
        let condition = criteria.into_condition();
        let db = self.conn().await?;
        let paginator = E::find()
            .filter(condition)
            .into_partial_model::<P>()
            .paginate(db, params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page_index()).await?;
        Ok(Paginated::new(data, params.page, params.limit(), total))
    }

    /// Count all rows
    async fn count(&self) -> DataResult<u64> {
        let db = self.conn().await?;
        E::find().paginate(db, 1).num_items().await.map_err(Into::into)
    }
}

/// Write operations (insert and update)
#[async_trait]
pub trait WriteRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Resolve the backing database connection
    async fn conn(&self) -> DataResult<&DatabaseConnection>;

    /// Insert a new row; returns the persisted model including the
    /// generated identifier.
    async fn insert(&self, model: A) -> DataResult<M> {
        let db = self.conn().await?;
        model.insert(db).await.map_err(Into::into)
    }

    /// Apply a partial update to the row with the given id.
    ///
    /// Only fields set on `patch` are written; unset fields are left
    /// untouched. Fails with [`DataError::NotFound`] when the id does not
    /// resolve. A patch with nothing set returns the current row as-is.
    async fn update_by_id(&self, id: PrimaryKeyOf<E>, mut patch: A) -> DataResult<M>
    where
        PrimaryKeyOf<E>: Clone + Send + Into<Value>,
    {
        let db = self.conn().await?;
        let current = E::find_by_id(id.clone())
            .one(db)
            .await?
            .ok_or_not_found(E::default().table_name())?;

        if !patch.is_changed() {
            return Ok(current);
        }

        // Pin the patch to the row whose existence was just confirmed.
        let pk = primary_key_column::<E>()?;
        patch.set(pk, id.into());

        match patch.update(db).await {
            Ok(model) => Ok(model),
            // The row vanished between the lookup and the update.
            Err(DbErr::RecordNotUpdated) => Err(DataError::not_found(E::default().table_name())),
            Err(err) => Err(err.into()),
        }
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Resolve the backing database connection
    async fn conn(&self) -> DataResult<&DatabaseConnection>;

    /// Delete the row with the given id.
    ///
    /// Fails with [`DataError::NotFound`] when the id does not resolve.
    async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> DataResult<()>
    where
        PrimaryKeyOf<E>: Clone + Send,
    {
        let db = self.conn().await?;
        let result = E::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(DataError::not_found(E::default().table_name()));
        }
        Ok(())
    }

    /// Delete every row in the backing table.
    ///
    /// Unfiltered and irreversible; intended for privileged callers only.
    /// Returns the number of rows removed.
    async fn delete_all(&self) -> DataResult<u64> {
        let db = self.conn().await?;
        tracing::warn!(table = E::default().table_name(), "deleting all rows");
        let result = E::delete_many().exec(db).await?;
        Ok(result.rows_affected)
    }
}

/// Full CRUD repository - combines all operations.
///
/// Extend by implementing the individual traits; this one comes for free.
pub trait CrudRepository<E, M, A>:
    ReadRepository<E, M> + WriteRepository<E, M, A> + DeleteRepository<E>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

impl<T, E, M, A> CrudRepository<E, M, A> for T
where
    T: ReadRepository<E, M> + WriteRepository<E, M, A> + DeleteRepository<E>,
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

/// The column behind an entity's primary key.
///
/// Composite keys are not supported by the id-based operations; the first
/// declared key column is used.
pub(crate) fn primary_key_column<E: EntityTrait>() -> DataResult<E::Column> {
    E::PrimaryKey::iter()
        .next()
        .map(PrimaryKeyToColumn::into_column)
        .ok_or_else(|| DataError::configuration("entity declares no primary key column"))
}
