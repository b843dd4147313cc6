//! Concrete generic repository bound to a single entity type.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel,
};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::soft_delete::{SoftDeletes, TrashRepository};
use crate::db::Database;
use crate::errors::DataResult;

/// A repository for one entity type over a shared [`Database`] handle.
///
/// The entity binding is the type parameter: fixed at construction, exactly
/// one entity per repository. The connection itself is resolved lazily by
/// the handle on first use, so constructing repositories is free.
///
/// # Example
///
/// ```ignore
/// let users: EntityRepository<user::Entity> = database.repository();
/// let everyone = users.find_all().await?;
/// ```
pub struct EntityRepository<E> {
    database: Arc<Database>,
    // fn pointer keeps the marker Send + Sync for any entity type
    _entity: PhantomData<fn() -> E>,
}

impl<E> EntityRepository<E> {
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            database,
            _entity: PhantomData,
        }
    }

    /// The backing store handle
    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }
}

impl<E> Clone for EntityRepository<E> {
    fn clone(&self) -> Self {
        Self {
            database: self.database.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, M> ReadRepository<E, M> for EntityRepository<E>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    async fn conn(&self) -> DataResult<&DatabaseConnection> {
        self.database.connection().await
    }
}

#[async_trait]
impl<E, M, A> WriteRepository<E, M, A> for EntityRepository<E>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    async fn conn(&self) -> DataResult<&DatabaseConnection> {
        self.database.connection().await
    }
}

#[async_trait]
impl<E> DeleteRepository<E> for EntityRepository<E>
where
    E: EntityTrait,
{
    async fn conn(&self) -> DataResult<&DatabaseConnection> {
        self.database.connection().await
    }
}

#[async_trait]
impl<E, M> TrashRepository<E, M> for EntityRepository<E>
where
    E: SoftDeletes + EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    async fn conn(&self) -> DataResult<&DatabaseConnection> {
        self.database.connection().await
    }
}
