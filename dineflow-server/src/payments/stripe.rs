//! Stripe integration via REST API (no SDK dependency)

use async_trait::async_trait;

use super::{ChargeOutcome, ChargeRequest, GatewayError, PaymentGateway};

/// Stripe PaymentIntent gateway
///
/// Creates and confirms a PaymentIntent in one call
/// (`confirmation_method=manual`, `confirm=true`).
pub struct StripeGateway {
    client: reqwest::Client,
    api_url: String,
    secret_key: Option<String>,
    return_url: String,
}

impl StripeGateway {
    pub fn new(
        secret_key: Option<String>,
        api_url: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            secret_key,
            return_url: return_url.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome, GatewayError> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or(GatewayError::NotConfigured)?;

        let amount = request.amount_minor.to_string();
        let resp = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_url))
            .basic_auth(secret_key, None::<&str>)
            .form(&[
                ("amount", amount.as_str()),
                ("currency", request.currency.as_str()),
                ("payment_method", request.payment_method.as_str()),
                ("confirmation_method", "manual"),
                ("confirm", "true"),
                ("return_url", self.return_url.as_str()),
                ("metadata[bookingId]", request.booking_id.as_str()),
                ("metadata[restaurantId]", request.restaurant_id.as_str()),
                ("metadata[customerEmail]", request.customer_email.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        // Declines and bad requests come back as non-2xx with an error body;
        // both are opaque failures to the booking flow.
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Http(format!("{status} - {text}")));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let reference = body["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| GatewayError::InvalidResponse(format!("missing intent id: {body}")))?;
        let status = body["status"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| GatewayError::InvalidResponse(format!("missing status: {body}")))?;

        Ok(ChargeOutcome { reference, status })
    }
}
