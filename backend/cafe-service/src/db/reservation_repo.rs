use super::mongo::{self, collect_records, insert_ack, to_insert_document};
use super::{MongoStore, ReservationRepository};
use crate::error::Result;
use crate::models::{InsertAck, Reservation};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// `reservation` collection
#[derive(Clone)]
pub struct MongoReservationRepository {
    collection: Collection<Document>,
}

impl MongoReservationRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::RESERVATIONS),
        }
    }
}

#[async_trait]
impl ReservationRepository for MongoReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(reservation)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn list(&self) -> Result<Vec<Reservation>> {
        let cursor = self.collection.find(doc! {}, None).await?;
        collect_records(cursor).await
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}, None).await?)
    }
}
