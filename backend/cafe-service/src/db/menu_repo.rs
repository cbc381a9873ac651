use super::mongo::{
    self, collect_records, delete_ack, id_filter, insert_ack, newest_first, to_insert_document,
};
use super::{MenuRepository, MongoStore};
use crate::error::Result;
use crate::models::{DeleteAck, InsertAck, MenuItem};
use crate::services::MenuFilter;
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

/// `menus` collection
#[derive(Clone)]
pub struct MongoMenuRepository {
    collection: Collection<Document>,
}

impl MongoMenuRepository {
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(mongo::MENUS),
        }
    }
}

/// Case-insensitive substring match; user input is escaped, never run as a pattern
fn contains_ignore_case(value: &str) -> Document {
    doc! { "$regex": regex::escape(value), "$options": "i" }
}

pub(crate) fn menu_query(filter: &MenuFilter) -> Document {
    let mut query = Document::new();
    if let Some(category) = &filter.category {
        query.insert("itemCategory", contains_ignore_case(category));
    }
    if let Some(origin) = &filter.food_origin {
        query.insert("foodOrigin", contains_ignore_case(origin));
    }
    query
}

#[async_trait]
impl MenuRepository for MongoMenuRepository {
    async fn insert(&self, item: &MenuItem) -> Result<InsertAck> {
        let result = self
            .collection
            .insert_one(to_insert_document(item)?, None)
            .await?;
        Ok(insert_ack(result))
    }

    async fn list(&self, filter: &MenuFilter, limit: Option<i64>) -> Result<Vec<MenuItem>> {
        let cursor = self
            .collection
            .find(menu_query(filter), newest_first(limit))
            .await?;
        collect_records(cursor).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let result = self.collection.delete_one(id_filter(id)?, None).await?;
        Ok(delete_ack(result))
    }
}
