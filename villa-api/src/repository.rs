use chrono::Utc;
use sqlx::Sqlite;
use std::future::Future;
use villa_data::{DataError, Entity, Repository, SqlxErrorExt, SqlxRepository, SqlxResult};

use crate::models::villa::Villa;

/// Villa-specific repository over the generic gateway.
///
/// The generic CRUD surface comes from the [`Repository`] trait impl below;
/// the one operation this layer adds is [`update`](VillaRepository::update),
/// a full-row replace keyed by identity. Timestamps are applied here: both
/// timestamps on insert, `updated_at` on every later write.
#[derive(Clone)]
pub struct VillaRepository {
    inner: SqlxRepository<Villa, Sqlite>,
}

impl VillaRepository {
    pub fn new(inner: SqlxRepository<Villa, Sqlite>) -> Self {
        Self { inner }
    }

    /// Case-insensitive lookup by name, used by the uniqueness pre-check.
    ///
    /// The check alone cannot exclude a concurrent duplicate; the `NOCASE`
    /// unique index on `name` is the actual guard, surfacing as
    /// [`DataError::Conflict`].
    pub async fn find_by_name(&self, name: &str) -> SqlxResult<Option<Villa>> {
        let (sql, params) = self
            .inner
            .query()
            .where_eq_nocase("name", name)
            .limit(1)
            .build_select(&Villa::select_list());
        let mut query = sqlx::query_as::<_, Villa>(&sql);
        for param in &params {
            query = query.bind(param);
        }
        query
            .fetch_optional(self.inner.pool())
            .await
            .map_err(|e| e.into_data_error())
    }

    /// Full-row replace keyed by id. `created_at` is left untouched.
    pub async fn update(&self, villa: &Villa) -> SqlxResult<()> {
        let result = sqlx::query(
            "UPDATE villas \
             SET name = ?, details = ?, rate = ?, sqft = ?, occupancy = ?, \
                 image_url = ?, amenity = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&villa.name)
        .bind(&villa.details)
        .bind(villa.rate)
        .bind(villa.sqft)
        .bind(villa.occupancy)
        .bind(&villa.image_url)
        .bind(&villa.amenity)
        .bind(Utc::now())
        .bind(villa.id)
        .execute(self.inner.pool())
        .await
        .map_err(|e| e.into_data_error())?;

        if result.rows_affected() == 0 {
            return Err(DataError::NotFound(format!("villa {} not found", villa.id)));
        }
        Ok(())
    }

    /// Insert and read back the stored row in one transaction, so the
    /// returned entity carries the store-assigned id and timestamps.
    async fn insert(&self, villa: &Villa) -> SqlxResult<Villa> {
        let now = Utc::now();
        let mut tx = self
            .inner
            .pool()
            .begin()
            .await
            .map_err(|e| e.into_data_error())?;

        sqlx::query(
            "INSERT INTO villas \
             (name, details, rate, sqft, occupancy, image_url, amenity, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&villa.name)
        .bind(&villa.details)
        .bind(villa.rate)
        .bind(villa.sqft)
        .bind(villa.occupancy)
        .bind(&villa.image_url)
        .bind(&villa.amenity)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| e.into_data_error())?;

        let sql = format!(
            "SELECT {} FROM villas WHERE rowid = last_insert_rowid()",
            Villa::select_list()
        );
        let created = sqlx::query_as::<_, Villa>(&sql)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| e.into_data_error())?;

        tx.commit().await.map_err(|e| e.into_data_error())?;
        Ok(created)
    }
}

impl Repository<Villa, i64> for VillaRepository {
    fn find_by_id(
        &self,
        id: &i64,
    ) -> impl Future<Output = Result<Option<Villa>, DataError>> + Send {
        async move {
            let (sql, params) = self
                .inner
                .query()
                .where_eq(Villa::id_column(), &id.to_string())
                .limit(1)
                .build_select(&Villa::select_list());
            let mut query = sqlx::query_as::<_, Villa>(&sql);
            for param in &params {
                query = query.bind(param);
            }
            query
                .fetch_optional(self.inner.pool())
                .await
                .map_err(|e| e.into_data_error())
        }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Villa>, DataError>> + Send {
        async move {
            let (sql, _) = self.inner.query().build_select(&Villa::select_list());
            sqlx::query_as::<_, Villa>(&sql)
                .fetch_all(self.inner.pool())
                .await
                .map_err(|e| e.into_data_error())
        }
    }

    fn save(&self, entity: &Villa) -> impl Future<Output = Result<Villa, DataError>> + Send {
        async move {
            if *entity.id() == 0 {
                self.insert(entity).await
            } else {
                self.update(entity).await?;
                // Read back so the returned row carries what the store
                // holds, not the caller's copy of the timestamps.
                match self.find_by_id(entity.id()).await? {
                    Some(stored) => Ok(stored),
                    None => Err(DataError::NotFound(format!(
                        "villa {} not found",
                        entity.id()
                    ))),
                }
            }
        }
    }

    fn delete(&self, id: &i64) -> impl Future<Output = Result<(), DataError>> + Send {
        async move {
            let result = sqlx::query("DELETE FROM villas WHERE id = ?")
                .bind(id)
                .execute(self.inner.pool())
                .await
                .map_err(|e| e.into_data_error())?;

            if result.rows_affected() == 0 {
                return Err(DataError::NotFound(format!("villa {id} not found")));
            }
            Ok(())
        }
    }
}
