use bson::oid::ObjectId;
use serde::Serialize;

use crate::models::user_model::User;

/// Public view of a user; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<ObjectId>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id_hex().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
            organization_id: user.organization_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}
