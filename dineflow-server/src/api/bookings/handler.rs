//! Bookings API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::bookings::{self, BookingReceipt};
use crate::core::ServerState;
use crate::db::models::BookingCreate;
use crate::utils::AppResult;
use crate::utils::validation::validate_payload;

/// POST /api/bookings - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    validate_payload(&payload)?;

    let receipt = bookings::create_booking(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
