use super::mongo::{
    self, collect_records, delete_ack, id_filter, insert_ack, to_insert_document, to_record,
};
use super::{CouponRepository, MongoStore};
use crate::error::Result;
use crate::models::{Coupon, DeleteAck, InsertAck};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// `coupons` collection
#[derive(Clone)]
pub struct MongoCouponRepository {
    collection: Collection<Document>,
}

impl MongoCouponRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::COUPONS),
        }
    }
}

#[async_trait]
impl CouponRepository for MongoCouponRepository {
    async fn insert(&self, coupon: &Coupon) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(coupon)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Coupon>> {
        self.collection
            .find_one(doc! { "couponName": name }, None)
            .await?
            .map(to_record)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Coupon>> {
        let cursor = self.collection.find(doc! {}, None).await?;
        collect_records(cursor).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let result = self.collection.delete_one(id_filter(id)?, None).await?;
        Ok(delete_ack(result))
    }
}
