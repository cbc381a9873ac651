use crate::error::Result;
use crate::models::Reservation;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `POST /reservationPostApi`
pub async fn create_reservation(
    state: web::Data<AppState>,
    reservation: web::Json<Reservation>,
) -> Result<HttpResponse> {
    let ack = state.reservations.insert(&reservation).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /getAllReservationApi` (admin)
pub async fn list_reservations(state: web::Data<AppState>) -> Result<HttpResponse> {
    let reservations = state.reservations.list().await?;
    Ok(HttpResponse::Ok().json(reservations))
}
