use super::mongo::{
    self, collect_records, id_filter, insert_ack, newest_first, parse_id, to_insert_document,
    to_record, update_ack,
};
use super::{MemoryRepository, MongoStore};
use crate::error::{AppError, Result};
use crate::models::{InsertAck, Memory, UpdateAck};
use crate::services::{InteractionError, InteractionPlan, LikeChange};
use async_trait::async_trait;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::UpdateModifications;
use mongodb::Collection;

/// `memories` collection
#[derive(Clone)]
pub struct MongoMemoryRepository {
    collection: Collection<Document>,
}

impl MongoMemoryRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::MEMORIES),
        }
    }
}

/// Filter and update document applying `plan` in a single server-side write
///
/// - pin only: `$set`
/// - like: `$inc` the counter and `$push` the liker at position 0
/// - unlike: a pipeline update that splices out the first occurrence of the
///   liker; the filter requires the liker to be present, so a miss matches
///   nothing instead of corrupting the list
pub(crate) fn interaction_update(
    id: ObjectId,
    plan: &InteractionPlan,
) -> Result<(Document, UpdateModifications)> {
    let pinned = plan
        .pinned_status
        .as_ref()
        .map(bson::to_bson)
        .transpose()?;

    match &plan.like {
        None => {
            let mut set = Document::new();
            if let Some(pinned) = pinned {
                set.insert("pinnedStatus", pinned);
            }
            Ok((
                doc! { "_id": id },
                UpdateModifications::Document(doc! { "$set": set }),
            ))
        }
        Some(LikeChange::Like(user)) => {
            let mut update = doc! {
                "$inc": { "likeCount": 1 },
                "$push": { "likedBy": { "$each": [user.as_str()], "$position": 0 } },
            };
            if let Some(pinned) = pinned {
                update.insert("$set", doc! { "pinnedStatus": pinned });
            }
            Ok((doc! { "_id": id }, UpdateModifications::Document(update)))
        }
        Some(LikeChange::Unlike(user)) => {
            let mut set = doc! {
                "likeCount": {
                    "$max": [0, { "$subtract": [{ "$ifNull": ["$likeCount", 0] }, 1] }]
                },
                "likedBy": {
                    "$let": {
                        "vars": {
                            "at": { "$indexOfArray": ["$likedBy", { "$literal": user.as_str() }] }
                        },
                        "in": {
                            "$concatArrays": [
                                {
                                    "$cond": [
                                        { "$eq": ["$$at", 0] },
                                        { "$literal": [] },
                                        { "$slice": ["$likedBy", "$$at"] }
                                    ]
                                },
                                {
                                    "$slice": [
                                        "$likedBy",
                                        { "$add": ["$$at", 1] },
                                        { "$max": [1, { "$size": "$likedBy" }] }
                                    ]
                                }
                            ]
                        }
                    }
                },
            };
            if let Some(pinned) = pinned {
                set.insert("pinnedStatus", doc! { "$literal": pinned });
            }
            Ok((
                doc! { "_id": id, "likedBy": user.as_str() },
                UpdateModifications::Pipeline(vec![doc! { "$set": set }]),
            ))
        }
    }
}

#[async_trait]
impl MemoryRepository for MongoMemoryRepository {
    async fn insert(&self, memory: &Memory) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(memory)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Memory>> {
        let cursor = self.collection.find(doc! {}, newest_first(limit)).await?;
        collect_records(cursor).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>> {
        self.collection
            .find_one(id_filter(id)?, None)
            .await?
            .map(to_record)
            .transpose()
    }

    async fn apply_interaction(&self, id: &str, plan: &InteractionPlan) -> Result<UpdateAck> {
        if plan.is_empty() {
            // Nothing to write, only confirm the memory exists
            return match self.find_by_id(id).await? {
                Some(_) => Ok(UpdateAck::unchanged()),
                None => Err(AppError::NotFound(format!("memory {}", id))),
            };
        }

        let (filter, update) = interaction_update(parse_id(id)?, plan)?;
        let result = self.collection.update_one(filter, update, None).await?;

        if result.matched_count > 0 {
            return Ok(update_ack(result));
        }

        // Nothing matched: either the memory is gone or the unliker is not in likedBy
        match (self.find_by_id(id).await?, &plan.like) {
            (None, _) => Err(AppError::NotFound(format!("memory {}", id))),
            (Some(_), Some(LikeChange::Unlike(user))) => {
                Err(InteractionError::NotLiked(user.clone()).into())
            }
            (Some(_), _) => Ok(update_ack(result)),
        }
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}, None).await?)
    }
}
