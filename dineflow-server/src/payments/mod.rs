//! 支付网关模块
//!
//! 定义网关 seam ([`PaymentGateway`]) 与请求/结果类型。
//! 生产实现为 Stripe REST API ([`StripeGateway`])，无 SDK 依赖；
//! 测试通过 mock 实现注入。

pub mod stripe;

pub use stripe::StripeGateway;

use async_trait::async_trait;
use thiserror::Error;

/// Gateway transport / protocol failures
///
/// All variants surface to the HTTP caller as a generic 500; the booking is
/// left unmodified.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway is not configured")]
    NotConfigured,

    #[error("gateway connection failed: {0}")]
    Connection(String),

    #[error("gateway rejected the request: {0}")]
    Http(String),

    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
}

/// A create-and-confirm charge request
///
/// `amount_minor` is in minor currency units (satang/cents). The metadata
/// fields tag the charge for reconciliation on the gateway side.
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    pub amount_minor: i64,
    pub currency: String,
    pub payment_method: String,
    pub booking_id: String,
    pub restaurant_id: String,
    pub customer_email: String,
}

/// The gateway's answer to a charge request
#[derive(Debug, Clone)]
pub struct ChargeOutcome {
    /// Gateway charge reference (stored on the booking when paid)
    pub reference: String,
    /// Gateway-reported status, e.g. "succeeded", "requires_action"
    pub status: String,
}

impl ChargeOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

/// Payment gateway seam
///
/// 同步调用：请求路径等待网关应答后才写回预订状态
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome, GatewayError>;
}
