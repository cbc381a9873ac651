use super::mongo::{
    self, collect_records, id_filter, insert_ack, to_insert_document, to_record, update_ack,
};
use super::{MongoStore, UserRepository};
use crate::error::Result;
use crate::models::{InsertAck, UpdateAck, User};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// `users` collection
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "email": email }, None)
            .await?
            .map(to_record)
            .transpose()
    }

    async fn insert(&self, user: &User) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(user)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn list_by_type(&self, user_type: &str) -> Result<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "userType": user_type }, None)
            .await?;
        collect_records(cursor).await
    }

    async fn count_by_type(&self, user_type: &str) -> Result<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "userType": user_type }, None)
            .await?)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck> {
        let result = self
            .collection
            .update_one(id_filter(id)?, doc! { "$set": { "userStatus": status } }, None)
            .await?;
        Ok(update_ack(result))
    }
}
