//! Repository Module
//!
//! Provides the document-store access layer: find-by-filter, insert and
//! update-by-id over SurrealDB tables, so the persistence technology stays
//! behind one seam.

pub mod booking;
pub mod restaurant;

// Re-exports
pub use booking::BookingRepository;
pub use restaurant::RestaurantRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => crate::utils::AppError::NotFound(msg),
            RepoError::Database(msg) => crate::utils::AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
