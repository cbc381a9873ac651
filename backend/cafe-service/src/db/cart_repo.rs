use super::mongo::{
    self, collect_records, delete_ack, id_filter, insert_ack, parse_id, to_insert_document,
};
use super::{CartRepository, MongoStore};
use crate::error::Result;
use crate::models::{CartItem, DeleteAck, InsertAck};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// `cartItems` collection
#[derive(Clone)]
pub struct MongoCartRepository {
    collection: Collection<Document>,
}

impl MongoCartRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::CART_ITEMS),
        }
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    async fn insert(&self, item: &CartItem) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(item)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn list_by_buyer(&self, buyer_email: &str) -> Result<Vec<CartItem>> {
        let cursor = self
            .collection
            .find(doc! { "buyerEmail": buyer_email }, None)
            .await?;
        collect_records(cursor).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let result = self.collection.delete_one(id_filter(id)?, None).await?;
        Ok(delete_ack(result))
    }

    async fn delete_many(&self, ids: &[String]) -> Result<DeleteAck> {
        // Validate every id before deleting anything
        let ids = ids
            .iter()
            .map(|id| parse_id(id))
            .collect::<Result<Vec<_>>>()?;

        let result = self
            .collection
            .delete_many(doc! { "_id": { "$in": ids } }, None)
            .await?;
        Ok(delete_ack(result))
    }
}
