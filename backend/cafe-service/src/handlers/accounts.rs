/// Account handlers: token issue, admin check, user records
use crate::error::{AppError, Result};
use crate::models::user::{UpdateUserStatusRequest, USER_TYPE_USER};
use crate::models::User;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::{json, Value};
use validator::Validate;

/// `POST /jwt`: sign whatever identity payload the client holds
pub async fn issue_token(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse> {
    let token = state
        .tokens
        .sign(payload.into_inner())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "token": token })))
}

/// `GET /verifyAdminApi/{email}`
pub async fn verify_admin(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse> {
    let admin = state
        .users
        .find_by_email(&email)
        .await?
        .map(|user| user.is_admin())
        .unwrap_or(false);

    Ok(HttpResponse::Ok().json(json!({ "admin": admin })))
}

/// `POST /createNewUser`: insert unless the email is already registered
pub async fn create_user(
    state: web::Data<AppState>,
    user: web::Json<User>,
) -> Result<HttpResponse> {
    let user = user.into_inner();
    user.validate()?;

    if state.users.find_by_email(&user.email).await?.is_some() {
        return Ok(HttpResponse::Ok().json(json!({
            "message": "User already exists",
            "insertedId": null
        })));
    }

    let ack = state.users.insert(&user).await?;
    tracing::info!(email = %user.email, "user registered");

    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /currentUser/{email}`: the user document or `null`
pub async fn current_user(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse> {
    let user = state.users.find_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// `GET /allUsers` (admin): regular users only
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    let users = state.users.list_by_type(USER_TYPE_USER).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// `PUT /updateUser/{id}` (admin): change `userStatus`
pub async fn update_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UpdateUserStatusRequest>,
) -> Result<HttpResponse> {
    let status = body
        .into_inner()
        .user_status
        .ok_or_else(|| AppError::BadRequest("userStatus is required".to_string()))?;

    let ack = state.users.update_status(&id, &status).await?;
    if ack.matched_count == 0 {
        return Err(AppError::NotFound(format!("user {}", id)));
    }

    tracing::info!(user_id = %id, status = %status, "user status updated");
    Ok(HttpResponse::Ok().json(ack))
}
