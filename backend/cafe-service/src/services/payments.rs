//! Payment intents
//!
//! The checkout page sends the order total in dollars; the intent is created
//! with the processor and only its client secret goes back to the browser.
//! The processor sits behind [`PaymentGateway`] so handlers can be exercised
//! without network access.

use crate::config::PaymentConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};
use validator::Validate;

/// Body of `POST /create-payment-intent`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentIntentRequest {
    #[serde(rename = "finalAmount")]
    #[validate(range(min = 0.01, max = 999999.99))]
    pub final_amount: f64,
}

impl PaymentIntentRequest {
    /// Order total in the smallest currency unit
    pub fn amount_in_cents(&self) -> i64 {
        (self.final_amount * 100.0).round() as i64
    }
}

/// Response of `POST /create-payment-intent`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// An intent as reported by the processor
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a card payment intent for `amount` cents
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent>;
}

/// Stripe REST implementation
pub struct StripeGateway {
    http_client: reqwest::Client,
    api_base: String,
    secret_key: String,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

impl StripeGateway {
    pub fn new(config: &PaymentConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client error: {e}")))?;

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
            currency: config.currency.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount: i64) -> Result<PaymentIntent> {
        if self.secret_key.is_empty() {
            return Err(AppError::PaymentGateway(
                "STRIPE_SECRET_KEY is not configured".to_string(),
            ));
        }

        let amount_param = amount.to_string();
        let form = [
            ("amount", amount_param.as_str()),
            ("currency", self.currency.as_str()),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .http_client
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!("Stripe request failed: {}", e);
                AppError::PaymentGateway(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("processor returned {status}"));
            error!(status = status.as_u16(), "Stripe rejected payment intent: {}", message);
            return Err(AppError::PaymentGateway(message));
        }

        let intent = response.json::<PaymentIntent>().await.map_err(|e| {
            AppError::PaymentGateway(format!("unexpected processor response: {e}"))
        })?;

        info!(
            intent_id = %intent.id,
            amount,
            currency = %intent.currency,
            "payment intent created"
        );
        Ok(intent)
    }
}
