use super::ExtraFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const USER_TYPE_ADMIN: &str = "admin";
pub const USER_TYPE_USER: &str = "user";

/// A registered account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "userType", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(rename = "userStatus", default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_type.as_deref() == Some(USER_TYPE_ADMIN)
    }
}

/// Body of `PUT /updateUser/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserStatusRequest {
    #[serde(rename = "userStatus")]
    pub user_status: Option<String>,
}
