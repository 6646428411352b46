use crate::entity::Entity;
use crate::query::QueryBuilder;
use sqlx::{Database, Pool};
use std::marker::PhantomData;

/// Typed handle pairing an entity with the pool its table lives in.
///
/// Concrete repositories hold one of these by composition and write their
/// statements against [`pool`](SqlxRepository::pool), using
/// [`query`](SqlxRepository::query) for the SELECTs that filter the table.
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    _entity: PhantomData<T>,
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    pub fn new(pool: Pool<DB>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    /// Start a query specification over this entity's table.
    pub fn query(&self) -> QueryBuilder
    where
        T: Entity,
    {
        QueryBuilder::new(T::table_name())
    }
}

// A derived Clone would require T: Clone, which PhantomData never needs.
impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}
