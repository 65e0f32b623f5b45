//! Restaurant Repository

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Restaurant, RestaurantCreate};

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all restaurants, stored order
    pub async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by id
    ///
    /// An id that fails to parse cannot reference a record and resolves to
    /// `None`.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let restaurant: Option<Restaurant> = self.base.db().select(thing).await?;
        Ok(restaurant)
    }

    /// Create a new restaurant
    pub async fn create(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let created: Option<Restaurant> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }
}
