/// MongoDB connection and document conversion helpers
use super::HealthCheck;
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{DeleteAck, InsertAck, UpdateAck};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::options::{ClientOptions, FindOptions, ServerApi, ServerApiVersion};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Client, Collection, Cursor, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const USERS: &str = "users";
pub const MENUS: &str = "menus";
pub const MEMORIES: &str = "memories";
pub const RESERVATIONS: &str = "reservation";
pub const CART_ITEMS: &str = "cartItems";
pub const COUPONS: &str = "coupons";

/// Pooled client bound to the application database
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect with the stable server API and verify with a ping
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("cafe-service".to_string());
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let store = Self {
            database: client.database(&config.name),
            client,
        };

        store.ping().await?;
        tracing::info!(
            database = %config.name,
            "Pinged deployment, MongoDB connection established"
        );

        Ok(store)
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl HealthCheck for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}

// =====================================================================
// Conversion helpers
// =====================================================================

pub(crate) fn parse_id(id: &str) -> Result<ObjectId> {
    Ok(ObjectId::parse_str(id.trim())?)
}

/// `{ _id: <id> }`
pub(crate) fn id_filter(id: &str) -> Result<Document> {
    Ok(doc! { "_id": parse_id(id)? })
}

/// Decode a stored document, exposing `_id` as a hex string
pub(crate) fn to_record<T: DeserializeOwned>(mut document: Document) -> Result<T> {
    if let Some(Bson::ObjectId(oid)) = document.get("_id") {
        let hex = oid.to_hex();
        document.insert("_id", hex);
    }
    Ok(bson::from_document(document)?)
}

/// Encode a record for insertion; the database assigns `_id`
pub(crate) fn to_insert_document<T: Serialize>(record: &T) -> Result<Document> {
    let mut document = bson::to_document(record)?;
    document.remove("_id");
    Ok(document)
}

pub(crate) async fn collect_records<T: DeserializeOwned>(
    cursor: Cursor<Document>,
) -> Result<Vec<T>> {
    let documents: Vec<Document> = cursor.try_collect().await?;
    documents.into_iter().map(to_record).collect()
}

/// Newest first (document ids embed their creation time)
pub(crate) fn newest_first(limit: Option<i64>) -> FindOptions {
    let mut options = FindOptions::default();
    options.sort = Some(doc! { "_id": -1 });
    options.limit = limit;
    options
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn insert_ack(result: InsertOneResult) -> InsertAck {
    InsertAck {
        acknowledged: true,
        inserted_id: Some(id_to_string(&result.inserted_id)),
    }
}

pub(crate) fn update_ack(result: UpdateResult) -> UpdateAck {
    UpdateAck {
        acknowledged: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_count: u64::from(result.upserted_id.is_some()),
        upserted_id: result.upserted_id.as_ref().map(id_to_string),
    }
}

pub(crate) fn delete_ack(result: DeleteResult) -> DeleteAck {
    DeleteAck::deleted(result.deleted_count)
}
