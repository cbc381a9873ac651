use super::ExtraFields;
use serde::{Deserialize, Serialize};

/// An item waiting in a buyer's cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "buyerEmail", default, skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Body of `POST /deleteCartItemsAfterPaymentApi`
#[derive(Debug, Clone, Deserialize)]
pub struct PaidCartItems {
    #[serde(rename = "allItemIds")]
    pub all_item_ids: Vec<String>,
}
