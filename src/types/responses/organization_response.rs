use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::role::Role;

#[derive(Debug, Serialize)]
pub struct MemberDetail {
    pub user_id: ObjectId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub code: String,
    pub owner_id: ObjectId,
    pub members: Vec<MemberDetail>,
}
