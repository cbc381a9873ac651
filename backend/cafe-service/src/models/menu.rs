use super::ExtraFields;
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "itemCategory", default, skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(rename = "foodOrigin", default, skip_serializing_if = "Option::is_none")]
    pub food_origin: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
