use crate::constants::SALES_COL_NAME;
use crate::types::responses::sale_response::LeaderboardEntry;
use crate::{config::database::get_collection, models::sale_model::Sale};
use chrono::{DateTime, Utc};
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, from_document, oid::ObjectId, to_bson};
use mongodb::error::Error as MongoError;
use mongodb::{Client, Collection, error::Result};

pub struct SaleRepository {
    collection: Collection<Sale>,
}

impl SaleRepository {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: get_collection(client, SALES_COL_NAME),
        }
    }

    pub async fn insert(&self, mut sale: Sale) -> Result<Sale> {
        let insert_result = self.collection.insert_one(&sale).await?;
        sale._id = insert_result.inserted_id.as_object_id();
        Ok(sale)
    }

    pub async fn find_by_id(&self, sale_id: &ObjectId) -> Result<Option<Sale>> {
        self.collection.find_one(doc! { "_id": *sale_id }).await
    }

    pub async fn find_for_org(&self, org_id: &ObjectId) -> Result<Vec<Sale>> {
        let cursor = self
            .collection
            .find(doc! { "organization_id": *org_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        cursor.try_collect().await
    }

    pub async fn count_for_timeslot(&self, timeslot_id: &ObjectId) -> Result<u64> {
        self.collection
            .count_documents(doc! { "timeslot_id": *timeslot_id })
            .await
    }

    pub async fn delete(&self, sale_id: &ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": *sale_id }).await?;
        Ok(())
    }

    pub async fn delete_by_workday(&self, workday_id: &ObjectId) -> Result<u64> {
        let result = self
            .collection
            .delete_many(doc! { "workday_id": *workday_id })
            .await?;
        Ok(result.deleted_count)
    }

    pub async fn delete_by_timeslot(&self, timeslot_id: &ObjectId) -> Result<u64> {
        let result = self
            .collection
            .delete_many(doc! { "timeslot_id": *timeslot_id })
            .await?;
        Ok(result.deleted_count)
    }

    pub async fn find_in_range(
        &self,
        org_id: &ObjectId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sale>> {
        let start_bson = to_bson(&start).map_err(MongoError::custom)?;
        let end_bson = to_bson(&end).map_err(MongoError::custom)?;

        let cursor = self
            .collection
            .find(doc! {
                "organization_id": *org_id,
                "created_at": { "$gte": start_bson, "$lt": end_bson },
            })
            .await?;
        cursor.try_collect().await
    }

    pub async fn aggregate_leaderboard(
        &self,
        org_id: &ObjectId,
    ) -> Result<Vec<LeaderboardEntry>> {
        let pipeline = vec![
            doc! { "$match": { "organization_id": *org_id } },
            doc! { "$group": {
                "_id": "$user_id",
                "sales_rep_name": { "$last": "$sales_rep_name" },
                "sale_count": { "$sum": 1 },
                "total_revenue": { "$sum": "$price" },
            }},
            doc! { "$sort": { "sale_count": -1, "total_revenue": -1 } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut entries = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            entries.push(from_document(document).map_err(MongoError::custom)?);
        }
        Ok(entries)
    }
}
