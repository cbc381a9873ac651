/// Menu catalog handlers
use crate::error::Result;
use crate::models::MenuItem;
use crate::services::{MenuFilter, MenuQuery};
use crate::state::AppState;
use actix_web::{web, HttpResponse};

const HOMEPAGE_MENU_SIZE: i64 = 6;

/// `POST /addNewItem` (admin)
pub async fn add_menu_item(
    state: web::Data<AppState>,
    item: web::Json<MenuItem>,
) -> Result<HttpResponse> {
    let ack = state.menus.insert(&item).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /allMenu?category=&foodOrigin=`
pub async fn list_menu(
    state: web::Data<AppState>,
    query: web::Query<MenuQuery>,
) -> Result<HttpResponse> {
    let filter = MenuFilter::from_query(query.into_inner());
    let items = state.menus.list(&filter, None).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// `GET /latestMenuForHomepageApi`
pub async fn latest_menu(state: web::Data<AppState>) -> Result<HttpResponse> {
    let items = state
        .menus
        .list(&MenuFilter::default(), Some(HOMEPAGE_MENU_SIZE))
        .await?;
    Ok(HttpResponse::Ok().json(items))
}

/// `DELETE /deleteItemApi/{id}` (admin)
pub async fn delete_menu_item(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let ack = state.menus.delete(&id).await?;
    tracing::info!(item_id = %id, deleted = ack.deleted_count, "menu item deleted");
    Ok(HttpResponse::Ok().json(ack))
}
