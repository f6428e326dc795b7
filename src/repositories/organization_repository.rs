use crate::constants::ORGANIZATIONS_COL_NAME;
use crate::models::role::Role;
use crate::{
    config::database::get_collection,
    models::organization_model::{Organization, OrganizationMember},
};
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use mongodb::error::Error as MongoError;
use mongodb::{Client, Collection, error::Result};

pub struct OrganizationRepository {
    collection: Collection<Organization>,
}

impl OrganizationRepository {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: get_collection(client, ORGANIZATIONS_COL_NAME),
        }
    }

    pub async fn create_organization(
        &self,
        mut organization: Organization,
    ) -> Result<Organization> {
        let insert_result = self.collection.insert_one(&organization).await?;
        organization._id = insert_result.inserted_id.as_object_id();
        Ok(organization)
    }

    pub async fn find_by_id(&self, org_id: &ObjectId) -> Result<Option<Organization>> {
        self.collection.find_one(doc! { "_id": *org_id }).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Organization>> {
        self.collection.find_one(doc! { "code": code }).await
    }

    /// The organization a user belongs to, as owner or member.
    pub async fn find_for_user(&self, user_id: &ObjectId) -> Result<Option<Organization>> {
        self.collection
            .find_one(doc! {
                "$or": [
                    { "owner_id": *user_id },
                    { "members.user_id": *user_id },
                ]
            })
            .await
    }

    pub async fn push_member(
        &self,
        org_id: &ObjectId,
        member: &OrganizationMember,
    ) -> Result<()> {
        let member_doc = to_bson(member).map_err(MongoError::custom)?;
        let updated_at = to_bson(&Utc::now()).map_err(MongoError::custom)?;

        self.collection
            .update_one(
                doc! { "_id": *org_id },
                doc! {
                    "$push": { "members": member_doc },
                    "$set": { "updated_at": updated_at },
                },
            )
            .await?;
        Ok(())
    }

    /// Returns false when the user is not in the member array.
    pub async fn set_member_role(
        &self,
        org_id: &ObjectId,
        user_id: &ObjectId,
        role: Role,
    ) -> Result<bool> {
        let role_bson = to_bson(&role).map_err(MongoError::custom)?;
        let updated_at = to_bson(&Utc::now()).map_err(MongoError::custom)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": *org_id, "members.user_id": *user_id },
                doc! {
                    "$set": { "members.$.role": role_bson, "updated_at": updated_at },
                },
            )
            .await?;
        Ok(result.matched_count == 1)
    }
}
