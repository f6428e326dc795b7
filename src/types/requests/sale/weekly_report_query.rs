use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WeeklyReportQuery {
    /// Monday of the requested week; defaults to the current week.
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
}
