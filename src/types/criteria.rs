//! Equality criteria for filtered lookups.

use sea_orm::sea_query::{Condition, IntoCondition};
use sea_orm::{ColumnTrait, EntityTrait, Value};

/// An AND-combined set of column equality predicates.
///
/// Insertion order does not affect semantics. An empty set matches every
/// row, so a filtered lookup with empty criteria behaves like its
/// unfiltered counterpart.
///
/// # Example
///
/// ```ignore
/// let admins = Criteria::<user::Entity>::new()
///     .eq(user::Column::Role, "admin")
///     .eq(user::Column::Name, "Terry");
/// ```
#[derive(Clone, Debug)]
pub struct Criteria<E: EntityTrait> {
    predicates: Vec<(E::Column, Value)>,
}

impl<E: EntityTrait> Criteria<E> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Require `column = value`
    pub fn eq(mut self, column: E::Column, value: impl Into<Value>) -> Self {
        self.predicates.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Lower into a SeaORM condition
    pub fn into_condition(self) -> Condition {
        self.predicates
            .into_iter()
            .fold(Condition::all(), |cond, (column, value)| {
                cond.add(column.eq(value))
            })
    }
}

impl<E: EntityTrait> Default for Criteria<E> {
    fn default() -> Self {
        Self::new()
    }
}

// Allows passing criteria straight to SeaORM's `.filter(...)`.
impl<E: EntityTrait> IntoCondition for Criteria<E> {
    fn into_condition(self) -> Condition {
        Criteria::into_condition(self)
    }
}
