use serde::Deserialize;

use crate::types::requests::workday::timeslot_input::TimeslotInput;

#[derive(Debug, Deserialize)]
pub struct UpdateWorkdayRequest {
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub timeslots: Option<Vec<TimeslotInput>>,
}
