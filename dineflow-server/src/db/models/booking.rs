//! Booking Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;
use super::restaurant::Restaurant;

/// Payment status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// Booking status enum
///
/// pending/confirmed 占用桌位；cancelled/no-show 释放
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(rename = "no-show")]
    NoShow,
}

impl BookingStatus {
    /// Parse a staff-updatable status. `pending` is creation-only and is
    /// rejected here along with unknown values.
    pub fn parse_staff_status(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "no-show" => Some(Self::NoShow),
            _ => None,
        }
    }
}

/// Booking entity (预订)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Restaurant record link
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant_id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Calendar date, `YYYY-MM-DD`
    pub booking_date: String,
    /// Time of day, `HH:MM`
    pub booking_time: String,
    pub num_guests: i32,
    pub table_id: String,
    /// Fixed at creation, never recomputed
    pub deposit_amount: f64,
    pub payment_status: PaymentStatus,
    pub booking_status: BookingStatus,
    /// Gateway charge reference, set on successful payment
    #[serde(default)]
    pub payment_reference: Option<String>,
    /// RFC 3339, set server-side at creation
    pub created_at: String,
}

/// Booking with the restaurant record joined in place of the link
/// (admin listing; FETCH 展开 restaurantId)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRestaurant {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub restaurant_id: Restaurant,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub num_guests: i32,
    pub table_id: String,
    pub deposit_amount: f64,
    pub payment_status: PaymentStatus,
    pub booking_status: BookingStatus,
    #[serde(default)]
    pub payment_reference: Option<String>,
    pub created_at: String,
}

/// Create booking payload
///
/// 所有字段必填；空字符串和 0 人数视为缺失 (与原型的 falsy 检查一致)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub restaurant_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "is required"))]
    pub customer_name: String,
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub customer_email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "is required"))]
    pub customer_phone: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub booking_date: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub booking_time: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub num_guests: i32,
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub table_id: String,
}
