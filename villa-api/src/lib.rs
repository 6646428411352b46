//! Villa API: a CRUD HTTP service over a single relational entity.
//!
//! Requests flow from the controller through [`repository::VillaRepository`]
//! and the `villa-data` gateway down to SQLite. Every bodied response is wrapped in the
//! [`response::ApiResponse`] envelope.

pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod repository;
pub mod response;
pub mod state;
