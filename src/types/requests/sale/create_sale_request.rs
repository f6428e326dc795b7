use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    /// Hex id of the timeslot the sale was made during.
    pub timeslot_id: String,

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
}
