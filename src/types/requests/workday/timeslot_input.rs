use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct TimeslotInput {
    /// Hex id of an existing timeslot; present on updates so its
    /// assignments survive a timeslot edit.
    #[serde(default)]
    pub id: Option<String>,

    pub start_time: String,

    pub end_time: String,

    pub max_employees: u32,
}
