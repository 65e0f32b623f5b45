//! Restaurants API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::bookings;
use crate::core::ServerState;
use crate::db::models::{Restaurant, RestaurantTable};
use crate::db::repository::RestaurantRepository;
use crate::utils::validation::parse_guests;
use crate::utils::{AppError, AppResult};

/// GET /api/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurants = repo.find_all().await?;
    Ok(Json(restaurants))
}

/// Availability query string; all three parameters are required
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    date: Option<String>,
    time: Option<String>,
    guests: Option<String>,
}

/// GET /api/restaurants/{id}/tables/available - 槽位空桌查询
pub async fn available_tables(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<Vec<RestaurantTable>>> {
    // Empty values count as missing, like the rest of the required fields
    let (Some(date), Some(time), Some(guests)) = (
        params.date.filter(|v| !v.is_empty()),
        params.time.filter(|v| !v.is_empty()),
        params.guests.filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::validation(
            "Missing required query parameters (date, time, guests).",
        ));
    };
    let guests = parse_guests(&guests)?;

    let tables = bookings::available_tables(&state.db, &id, &date, &time, guests).await?;
    Ok(Json(tables))
}
