//! 可用性检查
//!
//! 给定餐厅/日期/时间/人数，计算空闲桌位。只读，无副作用。

use std::collections::HashSet;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::RestaurantTable;
use crate::db::repository::{BookingRepository, RestaurantRepository};
use crate::utils::{AppError, AppResult};

/// Free tables for one slot
///
/// Loads the restaurant's full table list and every active booking for the
/// slot, then keeps tables whose capacity fits the party and whose id is not
/// claimed. Result order follows the restaurant's stored table order.
pub async fn available_tables(
    db: &Surreal<Db>,
    restaurant_id: &str,
    date: &str,
    time: &str,
    guests: i32,
) -> AppResult<Vec<RestaurantTable>> {
    let restaurants = RestaurantRepository::new(db.clone());
    let bookings = BookingRepository::new(db.clone());

    let restaurant = restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found."))?;
    let restaurant_ref = restaurant
        .id
        .clone()
        .ok_or_else(|| AppError::internal("restaurant record has no id"))?;

    let existing = bookings
        .find_active_for_slot(&restaurant_ref, date, time)
        .await?;
    let claimed: HashSet<&str> = existing.iter().map(|b| b.table_id.as_str()).collect();

    Ok(restaurant
        .tables
        .into_iter()
        .filter(|t| t.capacity >= guests && !claimed.contains(t.table_id.as_str()))
        .collect())
}
