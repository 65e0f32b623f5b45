//! 预订创建流程
//!
//! 校验 → 槽位冲突复查 → 计算押金 → 入库 (pending/pending)

use chrono::Utc;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::money;
use crate::db::models::{Booking, BookingCreate, BookingStatus, PaymentStatus, RestaurantTable};
use crate::db::repository::{BookingRepository, RestaurantRepository};
use crate::utils::{AppError, AppResult};

/// What the client needs to proceed to payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub message: &'static str,
    pub booking_id: String,
    pub deposit_amount: f64,
    pub restaurant_name: String,
    pub table_details: RestaurantTable,
}

/// Create a booking in the pending state
///
/// The conflict re-check immediately before insert narrows, but does not
/// close, the race window between two concurrent requests for the same slot.
pub async fn create_booking(
    db: &Surreal<Db>,
    payload: BookingCreate,
) -> AppResult<BookingReceipt> {
    let restaurants = RestaurantRepository::new(db.clone());
    let bookings = BookingRepository::new(db.clone());

    let restaurant = restaurants
        .find_by_id(&payload.restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found."))?;

    let table = restaurant
        .find_table(&payload.table_id)
        .ok_or_else(|| AppError::validation("Selected table not found for this restaurant."))?
        .clone();
    if table.capacity < payload.num_guests {
        return Err(AppError::validation(
            "Selected table capacity is too small for the number of guests.",
        ));
    }

    let restaurant_ref = restaurant
        .id
        .clone()
        .ok_or_else(|| AppError::internal("restaurant record has no id"))?;

    // Re-check the slot right before insert to narrow the double-booking window
    if bookings
        .find_active_for_table(
            &restaurant_ref,
            &payload.table_id,
            &payload.booking_date,
            &payload.booking_time,
        )
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "Selected table is no longer available at this time. Please choose another.",
        ));
    }

    // Deposit is fixed here and never recomputed
    let deposit_amount = money::deposit_for(restaurant.deposit_per_person, payload.num_guests);

    let booking = Booking {
        id: None,
        restaurant_id: restaurant_ref,
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
        booking_date: payload.booking_date,
        booking_time: payload.booking_time,
        num_guests: payload.num_guests,
        table_id: payload.table_id,
        deposit_amount,
        payment_status: PaymentStatus::Pending,
        booking_status: BookingStatus::Pending,
        payment_reference: None,
        created_at: Utc::now().to_rfc3339(),
    };
    let created = bookings.insert(booking).await?;
    let booking_id = created
        .id
        .ok_or_else(|| AppError::internal("created booking has no id"))?
        .to_string();

    tracing::info!(
        booking_id = %booking_id,
        restaurant = %restaurant.name,
        table_id = %created.table_id,
        "Booking created, awaiting payment"
    );

    Ok(BookingReceipt {
        message: "Booking created successfully, awaiting payment.",
        booking_id,
        deposit_amount,
        restaurant_name: restaurant.name,
        table_details: table,
    })
}
