/// Coupon handlers
use crate::error::Result;
use crate::models::coupon::{CouponCheck, CouponCheckRequest};
use crate::models::Coupon;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// `POST /newCouponCreateApi` (admin)
pub async fn create_coupon(
    state: web::Data<AppState>,
    coupon: web::Json<Coupon>,
) -> Result<HttpResponse> {
    coupon.validate()?;
    let ack = state.coupons.insert(&coupon).await?;
    tracing::info!(coupon = %coupon.coupon_name, "coupon created");
    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /getAllCouponAdminApi` (admin)
pub async fn list_coupons(state: web::Data<AppState>) -> Result<HttpResponse> {
    let coupons = state.coupons.list().await?;
    Ok(HttpResponse::Ok().json(coupons))
}

/// `DELETE /deleteCouponApi/{id}` (admin)
pub async fn delete_coupon(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let ack = state.coupons.delete(&id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// `POST /couponCodeValidationApi` (bearer)
pub async fn validate_coupon(
    state: web::Data<AppState>,
    body: web::Json<CouponCheckRequest>,
) -> Result<HttpResponse> {
    let found = state.coupons.find_by_name(&body.coupon_code).await?;
    Ok(HttpResponse::Ok().json(CouponCheck::from(found)))
}
