use crate::constants::USERS_COL_NAME;
use crate::{config::database::get_collection, models::user_model::User};
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use mongodb::error::Error as MongoError;
use mongodb::{Client, Collection, error::Result};

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: get_collection(client, USERS_COL_NAME),
        }
    }

    pub async fn create_user(&self, mut user: User) -> Result<User> {
        let insert_result = self.collection.insert_one(&user).await?;
        user._id = insert_result.inserted_id.as_object_id();
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.collection.find_one(doc! { "email": email }).await
    }

    pub async fn find_by_id(&self, user_id: &ObjectId) -> Result<Option<User>> {
        self.collection.find_one(doc! { "_id": *user_id }).await
    }

    pub async fn find_by_ids(&self, user_ids: &[ObjectId]) -> Result<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": user_ids } })
            .await?;
        cursor.try_collect().await
    }

    pub async fn set_organization(
        &self,
        user_id: &ObjectId,
        organization_id: Option<&ObjectId>,
    ) -> Result<()> {
        let updated_at = mongodb::bson::to_bson(&Utc::now()).map_err(MongoError::custom)?;
        let organization = organization_id
            .map(|id| Bson::ObjectId(*id))
            .unwrap_or(Bson::Null);

        self.collection
            .update_one(
                doc! { "_id": *user_id },
                doc! { "$set": { "organization_id": organization, "updated_at": updated_at } },
            )
            .await?;
        Ok(())
    }
}
