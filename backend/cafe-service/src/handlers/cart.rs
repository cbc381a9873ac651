/// Cart handlers
use crate::error::Result;
use crate::models::cart::PaidCartItems;
use crate::models::CartItem;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `POST /newOrderApi` (bearer)
pub async fn add_cart_item(
    state: web::Data<AppState>,
    item: web::Json<CartItem>,
) -> Result<HttpResponse> {
    let ack = state.carts.insert(&item).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /getAllCartItemsApi/{email}`
pub async fn list_cart_items(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse> {
    let items = state.carts.list_by_buyer(&email).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// `DELETE /deleteItemFromCartApi/{id}` (bearer)
pub async fn delete_cart_item(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let ack = state.carts.delete(&id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// `POST /deleteCartItemsAfterPaymentApi` (bearer)
pub async fn clear_paid_cart_items(
    state: web::Data<AppState>,
    body: web::Json<PaidCartItems>,
) -> Result<HttpResponse> {
    let ack = state.carts.delete_many(&body.all_item_ids).await?;
    tracing::info!(
        requested = body.all_item_ids.len(),
        deleted = ack.deleted_count,
        "paid cart items cleared"
    );
    Ok(HttpResponse::Ok().json(ack))
}
