use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::requests::workday::timeslot_input::TimeslotInput;

#[derive(Debug, Deserialize)]
pub struct CreateWorkdayRequest {
    pub date: NaiveDate,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub timeslots: Vec<TimeslotInput>,
}
