//! 押金支付流程
//!
//! 状态检查 → 金额核对 (只记日志) → 网关扣款 → 状态流转 → 通知入队

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use super::money;
use crate::db::models::PaymentStatus;
use crate::db::repository::{BookingRepository, RestaurantRepository};
use crate::notify::{BookingNotice, NotificationService};
use crate::payments::{ChargeRequest, PaymentGateway};
use crate::utils::{AppError, AppResult};

/// POST /api/payments/process request body
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProcessRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub booking_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    pub payment_method_id: String,
    /// Amount in minor currency units, as supplied by the client
    #[serde(default)]
    #[validate(range(min = 1, message = "is required"))]
    pub amount: i64,
}

/// Result of a payment attempt that reached the gateway
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    /// Charge succeeded; booking is paid + confirmed
    Confirmed { booking_id: String },
    /// Gateway answered with a non-success status; booking payment marked failed
    Declined { gateway_status: String },
}

/// Charge the deposit for a booking
///
/// The expected amount is always round(depositAmount × 100); a differing
/// client-supplied amount is logged and the expected amount is charged anyway.
/// Gateway transport errors leave the booking unmodified.
pub async fn process_payment(
    db: &Surreal<Db>,
    gateway: &dyn PaymentGateway,
    notifications: &NotificationService,
    currency: &str,
    request: &PaymentProcessRequest,
) -> AppResult<PaymentOutcome> {
    let bookings = BookingRepository::new(db.clone());
    let restaurants = RestaurantRepository::new(db.clone());

    let booking = bookings
        .find_by_id(&request.booking_id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found."))?;

    // No double charge
    if booking.payment_status == PaymentStatus::Paid {
        return Err(AppError::state("Booking already paid."));
    }

    let restaurant = restaurants
        .find_by_id(&booking.restaurant_id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Restaurant not found."))?;

    let expected_minor = money::to_minor_units(booking.deposit_amount);
    if request.amount != expected_minor {
        // 金额不一致不拒绝请求，扣的是服务端算出的金额
        tracing::warn!(
            booking_id = %request.booking_id,
            expected = expected_minor,
            got = request.amount,
            "Payment amount mismatch"
        );
    }

    let booking_ref = booking
        .id
        .clone()
        .ok_or_else(|| AppError::internal("booking record has no id"))?;

    let charge = ChargeRequest {
        amount_minor: expected_minor,
        currency: currency.to_string(),
        payment_method: request.payment_method_id.clone(),
        booking_id: booking_ref.to_string(),
        restaurant_id: booking.restaurant_id.to_string(),
        customer_email: booking.customer_email.clone(),
    };

    let outcome = gateway
        .create_charge(&charge)
        .await
        .map_err(|e| AppError::internal(format!("Payment gateway error: {e}")))?;

    if !outcome.succeeded() {
        bookings.mark_failed(&booking_ref).await?;
        tracing::info!(
            booking_id = %booking_ref,
            gateway_status = %outcome.status,
            "Payment declined"
        );
        return Ok(PaymentOutcome::Declined {
            gateway_status: outcome.status,
        });
    }

    let paid = bookings
        .mark_paid(&booking_ref, &outcome.reference)
        .await?
        .ok_or_else(|| AppError::internal("booking disappeared while recording payment"))?;

    tracing::info!(
        booking_id = %booking_ref,
        reference = %outcome.reference,
        "Payment succeeded, booking confirmed"
    );

    // Fire-and-forget: the response does not wait on delivery
    notifications.enqueue(BookingNotice {
        booking_id: booking_ref.to_string(),
        restaurant_name: restaurant.name,
        customer_name: paid.customer_name,
        customer_email: paid.customer_email,
        customer_phone: paid.customer_phone,
        booking_date: paid.booking_date,
        booking_time: paid.booking_time,
        num_guests: paid.num_guests,
        table_id: paid.table_id,
        deposit_amount: paid.deposit_amount,
    });

    Ok(PaymentOutcome::Confirmed {
        booking_id: booking_ref.to_string(),
    })
}
