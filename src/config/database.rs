use mongodb::{
    Client, Collection, IndexModel,
    bson::{Document, doc},
    error::Error as MongoError,
    options::{ClientOptions, IndexOptions},
};

use crate::constants::{
    DB_NAME, MONGODB_URI, ORGANIZATIONS_COL_NAME, USERS_COL_NAME, WORKDAYS_COL_NAME,
};

pub async fn connect_to_database() -> Result<Client, MongoError> {
    let client_uri = (*MONGODB_URI).as_str();

    let client_options = ClientOptions::parse(client_uri).await?;
    Client::with_options(client_options)
}

pub fn get_collection<T>(client: &Client, collection_name: &str) -> Collection<T>
where
    T: serde::de::DeserializeOwned + serde::Serialize + Send + Sync,
{
    client.database(&DB_NAME).collection::<T>(collection_name)
}

async fn create_unique_index(
    collection: &Collection<Document>,
    keys: Document,
) -> Result<(), MongoError> {
    let index = IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build();

    collection.create_index(index).await?;
    Ok(())
}

/// Uniqueness the application relies on: one account per email, one join code
/// per organization, one workday per (organization, date).
pub async fn create_unique_indexes(client: &Client) -> Result<(), MongoError> {
    let users = get_collection::<Document>(client, USERS_COL_NAME);
    create_unique_index(&users, doc! { "email": 1 }).await?;

    let organizations = get_collection::<Document>(client, ORGANIZATIONS_COL_NAME);
    create_unique_index(&organizations, doc! { "code": 1 }).await?;

    let workdays = get_collection::<Document>(client, WORKDAYS_COL_NAME);
    create_unique_index(&workdays, doc! { "organization_id": 1, "date": 1 }).await?;

    Ok(())
}
