/// Data models for cafe-service
///
/// Every record keeps the fields the server reads as typed members and
/// carries whatever else the web client posted in `extra`, so documents
/// round-trip without losing client data. Document ids travel as 24-char hex
/// strings under `_id`, matching what the web client already consumes.
pub mod cart;
pub mod coupon;
pub mod memory;
pub mod menu;
pub mod reservation;
pub mod user;

pub use cart::CartItem;
pub use coupon::Coupon;
pub use memory::{InteractionRequest, LikeUpdate, Memory};
pub use menu::MenuItem;
pub use reservation::Reservation;
pub use user::User;

use serde::{Deserialize, Serialize};

/// Free-form client fields preserved on every record
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Acknowledgment of a single insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

/// Acknowledgment of a single-document update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateAck {
    /// Ack for an update that matched and changed one document
    pub fn modified_one() -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
            ..Self::default()
        }
    }

    /// Ack for an update that matched one document and left it as it was
    pub fn unchanged() -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            ..Self::default()
        }
    }

    /// Ack for an update whose filter matched nothing
    pub fn unmatched() -> Self {
        Self {
            acknowledged: true,
            ..Self::default()
        }
    }
}

/// Acknowledgment of a delete (single or many)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}
