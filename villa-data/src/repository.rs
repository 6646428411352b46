use crate::error::DataError;
use std::future::Future;

/// Generic async repository trait for CRUD operations.
///
/// Uses RPITIT (return-position `impl Trait` in traits), so no `async-trait`
/// is needed.
///
/// Every read returns a detached copy of the row; there is no change tracker
/// and no deferred flush. `save` inserts when the entity carries no identity
/// yet and replaces the full row otherwise; either way the write is durable
/// when the future resolves and the returned entity is the stored row. `delete` fails with [`DataError::NotFound`] when
/// no row matches the id.
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    fn find_by_id(&self, id: &ID) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    fn save(&self, entity: &T) -> impl Future<Output = Result<T, DataError>> + Send;
    fn delete(&self, id: &ID) -> impl Future<Output = Result<(), DataError>> + Send;
}
