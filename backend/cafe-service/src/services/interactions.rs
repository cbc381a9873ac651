/// Memory interaction processing (pin, like, unlike)
///
/// A request is first turned into an [`InteractionPlan`]: a validated set of
/// independent field changes. The plan is then handed to the repository,
/// which applies it to the stored memory as one atomic update. Applying the
/// plan in process with [`InteractionPlan::apply`] has exactly the same
/// semantics and is what in-memory stores and tests use.
///
/// Semantics:
/// - A request with nothing to change is accepted and leaves the memory as
///   it is.
/// - `pinnedStatus` is set verbatim when present.
/// - like: `likeCount + 1`, liker prepended to `likedBy`. Liking twice
///   records the liker twice.
/// - unlike: `likeCount - 1` (never below zero), first occurrence of the
///   liker removed. Unliking a memory the user has not liked fails and
///   writes nothing.
use crate::db::MemoryRepository;
use crate::error::{AppError, Result};
use crate::models::{InteractionRequest, LikeUpdate, Memory, UpdateAck};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("likedPerson is required when likeUpdate is present")]
    MissingLikedPerson,

    #[error("{0} has not liked this memory")]
    NotLiked(String),
}

impl From<InteractionError> for AppError {
    fn from(err: InteractionError) -> Self {
        match err {
            InteractionError::MissingLikedPerson => AppError::BadRequest(err.to_string()),
            InteractionError::NotLiked(_) => AppError::Conflict(err.to_string()),
        }
    }
}

/// Like or unlike by one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeChange {
    Like(String),
    Unlike(String),
}

impl LikeChange {
    pub fn user(&self) -> &str {
        match self {
            LikeChange::Like(user) | LikeChange::Unlike(user) => user,
        }
    }
}

/// Validated field changes for one memory
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionPlan {
    pub pinned_status: Option<Value>,
    pub like: Option<LikeChange>,
}

impl InteractionPlan {
    pub fn from_request(req: InteractionRequest) -> std::result::Result<Self, InteractionError> {
        let like = match req.like_update {
            None => None,
            Some(tag) => {
                let user = req
                    .liked_person
                    .filter(|person| !person.is_empty())
                    .ok_or(InteractionError::MissingLikedPerson)?;
                Some(match tag {
                    LikeUpdate::Like => LikeChange::Like(user),
                    LikeUpdate::Unlike => LikeChange::Unlike(user),
                })
            }
        };

        Ok(Self {
            pinned_status: req.pinned_status,
            like,
        })
    }

    /// True when the plan changes no field
    pub fn is_empty(&self) -> bool {
        self.pinned_status.is_none() && self.like.is_none()
    }

    /// Apply the plan to a memory, all-or-nothing
    pub fn apply(&self, memory: &mut Memory) -> std::result::Result<(), InteractionError> {
        // Resolve the unlike position before touching anything.
        let unlike_at = match &self.like {
            Some(LikeChange::Unlike(user)) => Some(
                memory
                    .liked_by
                    .iter()
                    .position(|liker| liker == user)
                    .ok_or_else(|| InteractionError::NotLiked(user.clone()))?,
            ),
            _ => None,
        };

        if let Some(pinned) = &self.pinned_status {
            memory.pinned_status = Some(pinned.clone());
        }

        match &self.like {
            Some(LikeChange::Like(user)) => {
                memory.like_count += 1;
                memory.liked_by.insert(0, user.clone());
            }
            Some(LikeChange::Unlike(_)) => {
                if let Some(index) = unlike_at {
                    memory.liked_by.remove(index);
                }
                memory.like_count = (memory.like_count - 1).max(0);
            }
            None => {}
        }

        Ok(())
    }
}

/// Entry point used by the `PUT /postInteractApi/{id}` handler
#[derive(Clone)]
pub struct InteractionService {
    memories: Arc<dyn MemoryRepository>,
}

impl InteractionService {
    pub fn new(memories: Arc<dyn MemoryRepository>) -> Self {
        Self { memories }
    }

    pub async fn interact(&self, memory_id: &str, req: InteractionRequest) -> Result<UpdateAck> {
        let plan = InteractionPlan::from_request(req)?;

        let ack = self.memories.apply_interaction(memory_id, &plan).await?;

        tracing::info!(
            memory_id = %memory_id,
            pinned = plan.pinned_status.is_some(),
            like = ?plan.like,
            modified = ack.modified_count,
            "memory interaction applied"
        );

        Ok(ack)
    }
}
