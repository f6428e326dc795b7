use std::collections::HashMap;
use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::{
    errors::ApiError,
    models::{
        organization_model::{OrgAction, Organization},
        sale_model::Sale,
        workday_model::Timeslot,
    },
    repositories::{
        organization_repository::OrganizationRepository, sale_repository::SaleRepository,
        user_repository::UserRepository, workday_repository::WorkdayRepository,
    },
    types::{
        requests::sale::{
            create_sale_request::CreateSaleRequest, weekly_report_query::WeeklyReportQuery,
        },
        responses::sale_response::{
            DayTotal, LeaderboardEntry, WeeklyReport, WeeklyReportRow,
        },
    },
    utils::{auth_utils::AuthenticatedUser, validation_utils::to_api_error},
    validations::sale::validate_sale_data,
};

pub struct SaleService {
    sale_repository: Arc<SaleRepository>,
    workday_repository: Arc<WorkdayRepository>,
    organization_repository: Arc<OrganizationRepository>,
    user_repository: Arc<UserRepository>,
}

impl SaleService {
    pub fn new(
        sale_repository: Arc<SaleRepository>,
        workday_repository: Arc<WorkdayRepository>,
        organization_repository: Arc<OrganizationRepository>,
        user_repository: Arc<UserRepository>,
    ) -> Self {
        Self {
            sale_repository,
            workday_repository,
            organization_repository,
            user_repository,
        }
    }

    async fn organization_of(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Organization, ApiError> {
        self.organization_repository
            .find_for_user(&caller.user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Not associated with an organization"))
    }

    pub async fn create_sale(
        &self,
        caller: &AuthenticatedUser,
        data: CreateSaleRequest,
    ) -> Result<Sale, ApiError> {
        validate_sale_data(&data).map_err(|errors| to_api_error(errors, "Invalid sale data"))?;

        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::RecordSale)?;

        let timeslot_id = ObjectId::parse_str(&data.timeslot_id)
            .map_err(|_| ApiError::bad_request("Invalid timeslot id"))?;

        let workday = self
            .workday_repository
            .find_containing_timeslot(&timeslot_id)
            .await?
            .filter(|workday| Some(workday.organization_id) == organization._id)
            .ok_or_else(|| ApiError::not_found("Timeslot not found"))?;
        let timeslot = workday
            .timeslot(&timeslot_id)
            .ok_or_else(|| ApiError::not_found("Timeslot not found"))?;

        // Capacity is fixed; remaining spots are derived from recorded sales.
        let recorded = self.sale_repository.count_for_timeslot(&timeslot_id).await?;
        sale_capacity_check(timeslot, recorded)?;

        let rep = self
            .user_repository
            .find_by_id(&caller.user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        let sale = Sale {
            _id: None,
            name: data.name,
            number: data.number,
            address: data.address,
            price: data.price,
            details: data.details,
            sales_rep_name: rep.name,
            user_id: caller.user_id,
            organization_id: organization.id()?,
            workday_id: workday.id()?,
            timeslot_id,
            created_at: Utc::now(),
        };

        Ok(self.sale_repository.insert(sale).await?)
    }

    pub async fn list_sales(&self, caller: &AuthenticatedUser) -> Result<Vec<Sale>, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ViewSchedule)?;
        Ok(self
            .sale_repository
            .find_for_org(&organization.id()?)
            .await?)
    }

    pub async fn delete_sale(
        &self,
        caller: &AuthenticatedUser,
        sale_id: &str,
    ) -> Result<(), ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageOrganization)?;

        let sale_id = ObjectId::parse_str(sale_id)
            .map_err(|_| ApiError::bad_request("Invalid sale id"))?;
        self.sale_repository
            .find_by_id(&sale_id)
            .await?
            .filter(|sale| Some(sale.organization_id) == organization._id)
            .ok_or_else(|| ApiError::not_found("Sale not found"))?;

        self.sale_repository.delete(&sale_id).await?;
        Ok(())
    }

    pub async fn leaderboard(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ViewSchedule)?;
        Ok(self
            .sale_repository
            .aggregate_leaderboard(&organization.id()?)
            .await?)
    }

    pub async fn weekly_report(
        &self,
        caller: &AuthenticatedUser,
        query: WeeklyReportQuery,
    ) -> Result<WeeklyReport, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ViewSchedule)?;

        let week_start = query.week_start.unwrap_or_else(current_week_monday);
        let start = week_start.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(7);

        let sales = self
            .sale_repository
            .find_in_range(&organization.id()?, start, end)
            .await?;

        Ok(build_weekly_report(week_start, &sales))
    }
}

/// A sale needs at least one assigned rep and an open spot; spots are the
/// slot's fixed capacity minus the sales already recorded against it.
fn sale_capacity_check(timeslot: &Timeslot, recorded: u64) -> Result<(), ApiError> {
    if timeslot.assigned_users.is_empty() {
        return Err(ApiError::bad_request(
            "No sales reps assigned to this timeslot",
        ));
    }
    if recorded >= timeslot.max_employees as u64 {
        return Err(ApiError::bad_request("No spots available"));
    }
    Ok(())
}

fn current_week_monday() -> NaiveDate {
    let today = Utc::now().date_naive();
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

/// Groups a week of sales into per-rep, per-day totals.
fn build_weekly_report(week_start: NaiveDate, sales: &[Sale]) -> WeeklyReport {
    let empty_week: Vec<DayTotal> = (0..7)
        .map(|offset| DayTotal {
            date: week_start + Duration::days(offset),
            sale_count: 0,
            revenue: 0.0,
        })
        .collect();

    let mut rows: HashMap<ObjectId, WeeklyReportRow> = HashMap::new();
    let mut total_sales = 0u32;
    let mut total_revenue = 0.0f64;

    for sale in sales {
        let offset = (sale.created_at.date_naive() - week_start).num_days();
        if !(0..7).contains(&offset) {
            continue;
        }

        let row = rows.entry(sale.user_id).or_insert_with(|| WeeklyReportRow {
            user_id: sale.user_id,
            sales_rep_name: sale.sales_rep_name.clone(),
            days: empty_week.clone(),
            sale_count: 0,
            total_revenue: 0.0,
        });

        row.days[offset as usize].sale_count += 1;
        row.days[offset as usize].revenue += sale.price;
        row.sale_count += 1;
        row.total_revenue += sale.price;
        total_sales += 1;
        total_revenue += sale.price;
    }

    let mut rows: Vec<WeeklyReportRow> = rows.into_values().collect();
    rows.sort_by(|a, b| {
        b.sale_count
            .cmp(&a.sale_count)
            .then(b.total_revenue.total_cmp(&a.total_revenue))
            .then(a.sales_rep_name.cmp(&b.sales_rep_name))
    });

    WeeklyReport {
        week_start,
        week_end: week_start + Duration::days(6),
        rows,
        total_sales,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sale_on(
        user_id: ObjectId,
        rep: &str,
        date: NaiveDate,
        price: f64,
    ) -> Sale {
        Sale {
            _id: Some(ObjectId::new()),
            name: "Customer".to_string(),
            number: String::new(),
            address: String::new(),
            price,
            details: String::new(),
            sales_rep_name: rep.to_string(),
            user_id,
            organization_id: ObjectId::new(),
            workday_id: ObjectId::new(),
            timeslot_id: ObjectId::new(),
            created_at: Utc
                .from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())),
        }
    }

    fn slot_with_reps(max_employees: u32, reps: usize) -> Timeslot {
        let mut slot = Timeslot {
            _id: ObjectId::new(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            max_employees,
            assigned_users: vec![],
        };
        for _ in 0..reps {
            slot.assign(ObjectId::new(), String::new()).unwrap();
        }
        slot
    }

    #[test]
    fn sale_rejected_when_no_reps_assigned() {
        let slot = slot_with_reps(2, 0);
        assert!(matches!(
            sale_capacity_check(&slot, 0),
            Err(ApiError::BadRequest(msg)) if msg == "No sales reps assigned to this timeslot"
        ));
    }

    #[test]
    fn sale_rejected_when_all_spots_taken() {
        let slot = slot_with_reps(2, 1);
        assert!(matches!(
            sale_capacity_check(&slot, 2),
            Err(ApiError::BadRequest(msg)) if msg == "No spots available"
        ));
    }

    #[test]
    fn sale_allowed_while_spots_remain() {
        let slot = slot_with_reps(2, 1);
        assert!(sale_capacity_check(&slot, 1).is_ok());
    }

    #[test]
    fn report_groups_sales_per_rep_and_day() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let alice = ObjectId::new();
        let bob = ObjectId::new();

        let sales = vec![
            sale_on(alice, "Alice", monday, 100.0),
            sale_on(alice, "Alice", monday, 50.0),
            sale_on(alice, "Alice", monday + Duration::days(2), 25.0),
            sale_on(bob, "Bob", monday + Duration::days(6), 300.0),
        ];

        let report = build_weekly_report(monday, &sales);
        assert_eq!(report.week_start, monday);
        assert_eq!(report.week_end, monday + Duration::days(6));
        assert_eq!(report.total_sales, 4);
        assert_eq!(report.total_revenue, 475.0);
        assert_eq!(report.rows.len(), 2);

        // Alice leads on count even though Bob out-earned her.
        let top = &report.rows[0];
        assert_eq!(top.sales_rep_name, "Alice");
        assert_eq!(top.sale_count, 3);
        assert_eq!(top.days[0].sale_count, 2);
        assert_eq!(top.days[0].revenue, 150.0);
        assert_eq!(top.days[2].sale_count, 1);
        assert_eq!(top.days[1].sale_count, 0);
    }

    #[test]
    fn report_ignores_sales_outside_the_week() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let rep = ObjectId::new();
        let sales = vec![
            sale_on(rep, "Rep", monday - Duration::days(1), 10.0),
            sale_on(rep, "Rep", monday + Duration::days(7), 10.0),
        ];

        let report = build_weekly_report(monday, &sales);
        assert!(report.rows.is_empty());
        assert_eq!(report.total_sales, 0);
    }

    #[test]
    fn empty_week_produces_empty_report_with_bounds() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let report = build_weekly_report(monday, &[]);
        assert_eq!(report.week_start, monday);
        assert_eq!(report.week_end, NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
        assert!(report.rows.is_empty());
    }
}
