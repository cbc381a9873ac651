use crate::error::Result;
use crate::models::user::USER_TYPE_USER;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Body of `GET /adminStatisticsPageInfoApi`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatistics {
    pub total_users: u64,
    pub total_reservation: u64,
    pub total_memories: u64,
}

/// `GET /adminStatisticsPageInfoApi` (admin)
pub async fn admin_statistics(state: web::Data<AppState>) -> Result<HttpResponse> {
    let (total_users, total_reservation, total_memories) = futures::try_join!(
        state.users.count_by_type(USER_TYPE_USER),
        state.reservations.count(),
        state.memories.count(),
    )?;

    Ok(HttpResponse::Ok().json(AdminStatistics {
        total_users,
        total_reservation,
        total_memories,
    }))
}
