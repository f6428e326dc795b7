use bson::oid::ObjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the leaderboard aggregation. `_id` is the grouping key.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id")]
    pub user_id: ObjectId,
    pub sales_rep_name: String,
    pub sale_count: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub sale_count: u32,
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReportRow {
    pub user_id: ObjectId,
    pub sales_rep_name: String,
    pub days: Vec<DayTotal>,
    pub sale_count: u32,
    pub total_revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub rows: Vec<WeeklyReportRow>,
    pub total_sales: u32,
    pub total_revenue: f64,
}
