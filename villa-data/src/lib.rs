//! # villa-data: generic data access layer
//!
//! The domain-agnostic half of the Villa API's persistence stack. Nothing in
//! this crate knows about villas; it provides the pieces an entity crate
//! combines into a concrete repository:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Entity`] | Table name, id column, and column list for a row type |
//! | [`QueryBuilder`] | Explicit query specification producing `(sql, params)` |
//! | [`Repository`] | Generic async CRUD trait (find, save, delete) |
//! | [`SqlxRepository`] | Pool wrapper binding an entity type to an `sqlx::Pool` |
//! | [`DataError`] | Data-layer error taxonomy |
//! | [`SqlxErrorExt`] | Bridges `sqlx::Error` into `DataError` (`.into_data_error()`) |

pub mod entity;
pub mod error;
pub mod pool;
pub mod query;
pub mod repository;
pub mod sqlx_ext;

pub use entity::Entity;
pub use error::DataError;
pub use pool::SqlxRepository;
pub use query::QueryBuilder;
pub use repository::Repository;
pub use sqlx_ext::{SqlxErrorExt, SqlxResult};
