use crate::error::Result;
use crate::services::payments::{PaymentIntentRequest, PaymentIntentResponse};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// `POST /create-payment-intent`
pub async fn create_payment_intent(
    state: web::Data<AppState>,
    body: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse> {
    body.validate()?;

    let intent = state.payments.create_intent(body.amount_in_cents()).await?;

    Ok(HttpResponse::Ok().json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
