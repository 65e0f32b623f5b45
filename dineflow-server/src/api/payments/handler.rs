//! Payments API Handlers

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::bookings::{self, PaymentOutcome, PaymentProcessRequest};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_payload;

/// Payment endpoint response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gateway_status: Option<String>,
}

/// POST /api/payments/process - 押金扣款
///
/// 成功 200；网关拒绝 400 并带回网关状态；已支付 400；未知预订 404
pub async fn process(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentProcessRequest>,
) -> AppResult<Response> {
    validate_payload(&payload)?;

    let outcome = bookings::process_payment(
        &state.db,
        state.gateway.as_ref(),
        &state.notifications,
        &state.config.currency,
        &payload,
    )
    .await?;

    let response = match outcome {
        PaymentOutcome::Confirmed { booking_id } => (
            StatusCode::OK,
            Json(PaymentResponse {
                success: true,
                message: "Payment successful, booking confirmed!",
                booking_id: Some(booking_id),
                gateway_status: None,
            }),
        ),
        PaymentOutcome::Declined { gateway_status } => (
            StatusCode::BAD_REQUEST,
            Json(PaymentResponse {
                success: false,
                message: "Payment failed.",
                booking_id: None,
                gateway_status: Some(gateway_status),
            }),
        ),
    };
    Ok(response.into_response())
}
