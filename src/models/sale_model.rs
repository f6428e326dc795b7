use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Sale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Customer name.
    pub name: String,

    /// Customer phone number.
    #[serde(default)]
    pub number: String,

    #[serde(default)]
    pub address: String,

    pub price: f64,

    #[serde(default)]
    pub details: String,

    pub sales_rep_name: String,

    pub user_id: ObjectId,

    pub organization_id: ObjectId,

    pub workday_id: ObjectId,

    pub timeslot_id: ObjectId,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
