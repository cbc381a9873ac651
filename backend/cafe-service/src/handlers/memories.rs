/// Memories feed handlers
use crate::error::Result;
use crate::middleware::AuthClaims;
use crate::models::{InteractionRequest, Memory};
use crate::state::AppState;
use actix_web::{web, HttpResponse};

const HOMEPAGE_STORY_COUNT: i64 = 8;

/// `POST /postNewMemoryApi` (bearer)
///
/// Likes are only ever changed through interactions, so a new memory starts
/// with none regardless of what the client sent.
pub async fn post_memory(
    state: web::Data<AppState>,
    claims: AuthClaims,
    memory: web::Json<Memory>,
) -> Result<HttpResponse> {
    let memory = Memory {
        like_count: 0,
        liked_by: Vec::new(),
        ..memory.into_inner()
    };

    let ack = state.memories.insert(&memory).await?;
    tracing::info!(author = %claims.email(), memory_id = ?ack.inserted_id, "memory posted");

    Ok(HttpResponse::Ok().json(ack))
}

/// `GET /getAllMemoriesApi`: newest first
pub async fn list_memories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let memories = state.memories.list(None).await?;
    Ok(HttpResponse::Ok().json(memories))
}

/// `GET /latestStoriesForHomeApi`
pub async fn latest_memories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let memories = state.memories.list(Some(HOMEPAGE_STORY_COUNT)).await?;
    Ok(HttpResponse::Ok().json(memories))
}

/// `PUT /postInteractApi/{id}`: pin, like or unlike a memory
pub async fn interact_with_memory(
    state: web::Data<AppState>,
    id: web::Path<String>,
    req: web::Json<InteractionRequest>,
) -> Result<HttpResponse> {
    let ack = state.interactions().interact(&id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}
