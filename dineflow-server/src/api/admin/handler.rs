//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Booking, BookingStatus, BookingWithRestaurant, Restaurant, RestaurantCreate};
use crate::db::repository::{BookingRepository, RestaurantRepository};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult};

/// POST /api/admin/restaurants - 创建餐厅
///
/// 除必填字段外按原样入库
pub async fn create_restaurant(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    validate_payload(&payload)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(payload).await?;

    tracing::info!(
        name = %restaurant.name,
        tables = restaurant.tables.len(),
        "Restaurant created"
    );
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// GET /api/admin/bookings - 获取所有预订 (含餐厅详情)
pub async fn list_bookings(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<BookingWithRestaurant>>> {
    let repo = BookingRepository::new(state.db.clone());
    let bookings = repo.find_all_with_restaurant().await?;
    Ok(Json(bookings))
}

/// Status update payload
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    status: String,
}

/// Status update response
#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    message: &'static str,
    booking: Booking,
}

/// PUT /api/admin/bookings/{id}/status - 覆写预订状态
///
/// 只接受 confirmed / cancelled / no-show；无状态机约束，直接覆写
pub async fn update_booking_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let status = BookingStatus::parse_staff_status(&payload.status)
        .ok_or_else(|| AppError::validation("Invalid booking status."))?;

    let repo = BookingRepository::new(state.db.clone());
    let booking = repo
        .update_status(&id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found."))?;

    tracing::info!(booking_id = %id, status = %payload.status, "Booking status updated");
    Ok(Json(StatusUpdateResponse {
        message: "Booking status updated successfully",
        booking,
    }))
}
