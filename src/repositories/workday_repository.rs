use crate::constants::WORKDAYS_COL_NAME;
use crate::errors::is_duplicate_key_error;
use crate::{config::database::get_collection, models::workday_model::Workday};
use chrono::{NaiveDate, Utc};
use futures_util::stream::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId, to_bson};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Collection, error::Result};

pub struct WorkdayRepository {
    collection: Collection<Workday>,
}

impl WorkdayRepository {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: get_collection(client, WORKDAYS_COL_NAME),
        }
    }

    pub async fn insert(&self, mut workday: Workday) -> Result<Workday> {
        let insert_result = self.collection.insert_one(&workday).await?;
        workday._id = insert_result.inserted_id.as_object_id();
        Ok(workday)
    }

    /// Unordered bulk insert; duplicate-key rejections from the
    /// (organization, date) unique index are skipped, everything else is an
    /// error. Returns how many documents actually landed.
    pub async fn insert_many_skip_duplicates(&self, workdays: Vec<Workday>) -> Result<usize> {
        if workdays.is_empty() {
            return Ok(0);
        }

        let attempted = workdays.len();
        match self.collection.insert_many(&workdays).ordered(false).await {
            Ok(result) => Ok(result.inserted_ids.len()),
            Err(err) if is_duplicate_key_error(&err) => match &*err.kind {
                ErrorKind::InsertMany(insert_error) => {
                    let rejected = insert_error
                        .write_errors
                        .as_ref()
                        .map(|errors| errors.len())
                        .unwrap_or(attempted);
                    Ok(attempted - rejected)
                }
                _ => Ok(0),
            },
            Err(err) => Err(err),
        }
    }

    pub async fn find_by_id_for_org(
        &self,
        workday_id: &ObjectId,
        org_id: &ObjectId,
    ) -> Result<Option<Workday>> {
        self.collection
            .find_one(doc! { "_id": *workday_id, "organization_id": *org_id })
            .await
    }

    pub async fn find_containing_timeslot(
        &self,
        timeslot_id: &ObjectId,
    ) -> Result<Option<Workday>> {
        self.collection
            .find_one(doc! { "timeslots._id": *timeslot_id })
            .await
    }

    /// Workdays for one organization within an inclusive date range, sorted
    /// by date. Dates are stored as "YYYY-MM-DD" strings, which order
    /// lexicographically.
    pub async fn find_in_range(
        &self,
        org_id: &ObjectId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Workday>> {
        let mut filter = doc! { "organization_id": *org_id };

        let mut date_filter = Document::new();
        if let Some(start) = start_date {
            date_filter.insert("$gte", start.to_string());
        }
        if let Some(end) = end_date {
            date_filter.insert("$lte", end.to_string());
        }
        if !date_filter.is_empty() {
            filter.insert("date", date_filter);
        }

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "date": 1 })
            .await?;
        cursor.try_collect().await
    }

    /// Conditional update keyed on the stored version; false means another
    /// writer got there first and the caller should retry from a fresh read.
    pub async fn update_versioned(&self, workday: &Workday) -> Result<bool> {
        let workday_id = workday
            ._id
            .ok_or_else(|| MongoError::custom("workday is missing an id"))?;

        let timeslots = to_bson(&workday.timeslots).map_err(MongoError::custom)?;
        let updated_at = to_bson(&Utc::now()).map_err(MongoError::custom)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": workday_id, "version": workday.version },
                doc! {
                    "$set": {
                        "notes": workday.notes.clone(),
                        "timeslots": timeslots,
                        "updated_at": updated_at,
                    },
                    "$inc": { "version": 1 },
                },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    pub async fn delete(&self, workday_id: &ObjectId) -> Result<()> {
        self.collection
            .delete_one(doc! { "_id": *workday_id })
            .await?;
        Ok(())
    }
}
