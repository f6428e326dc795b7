use serde::Serialize;

use crate::models::workday_model::Workday;

#[derive(Debug, Serialize)]
pub struct WorkdaysResponse {
    pub workdays: Vec<Workday>,
    pub is_owner: bool,
    pub is_manager: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Workdays actually inserted; days that already existed are skipped.
    pub created: usize,
}
