//! Database Module
//!
//! Embedded SurrealDB storage. Restaurants and bookings are plain documents;
//! the booking→restaurant reference is a record link expanded with FETCH for
//! the admin listing.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use crate::utils::AppError;

const NAMESPACE: &str = "dineflow";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database (RocksDB backend)
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let _ = db_path;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established ({db_path})");
        Ok(Self { db })
    }

    /// Open an in-memory database (tests, local experiments)
    pub async fn open_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::RestaurantCreate;
    use crate::db::repository::RestaurantRepository;

    #[tokio::test]
    async fn test_on_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("dineflow.db");
        let service = DbService::new(&db_path.to_string_lossy()).await.unwrap();

        let repo = RestaurantRepository::new(service.db.clone());
        let created = repo
            .create(RestaurantCreate {
                name: "Persisted".to_string(),
                description: None,
                address: None,
                phone: None,
                image: None,
                deposit_per_person: 25.0,
                tables: vec![],
            })
            .await
            .unwrap();

        let id = created.id.as_ref().unwrap().to_string();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Persisted");
        assert_eq!(found.deposit_per_person, 25.0);
    }
}
