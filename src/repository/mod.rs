//! Repository layer - data access abstraction
//!
//! Contract traits with default implementations over SeaORM, plus the
//! concrete generic [`EntityRepository`] that works for any entity.

mod base;
mod entity_repository;
mod soft_delete;

pub use base::{CrudRepository, DeleteRepository, PrimaryKeyOf, ReadRepository, WriteRepository};
pub use entity_repository::EntityRepository;
pub use soft_delete::{SoftDeletes, TrashRepository};
