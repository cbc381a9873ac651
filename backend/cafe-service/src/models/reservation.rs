use super::ExtraFields;
use serde::{Deserialize, Serialize};

/// Table reservation, stored as posted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
