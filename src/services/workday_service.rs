use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::{Duration, NaiveDate, Utc};
use log::info;

use crate::{
    constants::{
        GENERATED_DAYS, GENERATED_SLOT_CAPACITY, GENERATED_SLOT_DURATION_HOURS,
        GENERATED_SLOT_START_HOURS,
    },
    errors::{ApiError, is_duplicate_key_error},
    models::{
        organization_model::{OrgAction, Organization},
        role::Role,
        workday_model::{Timeslot, Workday},
    },
    repositories::{
        organization_repository::OrganizationRepository, sale_repository::SaleRepository,
        workday_repository::WorkdayRepository,
    },
    types::{
        requests::workday::{
            assign_request::{AssignAction, AssignRequest},
            create_workday_request::CreateWorkdayRequest,
            timeslot_input::TimeslotInput,
            update_workday_request::UpdateWorkdayRequest,
            workday_query::WorkdayQuery,
        },
        responses::workday_response::WorkdaysResponse,
    },
    utils::{auth_utils::AuthenticatedUser, validation_utils::to_api_error},
    validations::timeslot::validate_timeslots,
};

pub struct WorkdayService {
    workday_repository: Arc<WorkdayRepository>,
    organization_repository: Arc<OrganizationRepository>,
    sale_repository: Arc<SaleRepository>,
}

impl WorkdayService {
    pub fn new(
        workday_repository: Arc<WorkdayRepository>,
        organization_repository: Arc<OrganizationRepository>,
        sale_repository: Arc<SaleRepository>,
    ) -> Self {
        Self {
            workday_repository,
            organization_repository,
            sale_repository,
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

    pub async fn list_workdays(
        &self,
        caller: &AuthenticatedUser,
        query: WorkdayQuery,
    ) -> Result<WorkdaysResponse, ApiError> {
        let organization = self.organization_of(caller).await?;
        let role = organization.authorize(&caller.user_id, OrgAction::ViewSchedule)?;

        let workdays = self
            .workday_repository
            .find_in_range(&organization.id()?, query.start_date, query.end_date)
            .await?;

        Ok(WorkdaysResponse {
            workdays,
            is_owner: role == Role::Owner,
            is_manager: role == Role::Manager,
        })
    }

    pub async fn create_workday(
        &self,
        caller: &AuthenticatedUser,
        data: CreateWorkdayRequest,
    ) -> Result<Workday, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageSchedule)?;

        validate_timeslots(&data.timeslots)
            .map_err(|errors| to_api_error(errors, "Invalid workday data"))?;

        let now = Utc::now();
        let workday = Workday {
            _id: None,
            organization_id: organization.id()?,
            date: data.date,
            notes: data.notes,
            timeslots: data.timeslots.iter().map(new_timeslot).collect(),
            version: 0,
            created_at: now,
            updated_at: now,
        };

        match self.workday_repository.insert(workday).await {
            Ok(created) => Ok(created),
            Err(err) if is_duplicate_key_error(&err) => Err(ApiError::Conflict(
                "A workday already exists for this date".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_workday(
        &self,
        caller: &AuthenticatedUser,
        workday_id: &str,
        data: UpdateWorkdayRequest,
    ) -> Result<Workday, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageSchedule)?;

        let workday_id = ObjectId::parse_str(workday_id)
            .map_err(|_| ApiError::bad_request("Invalid workday id"))?;
        let mut workday = self
            .workday_repository
            .find_by_id_for_org(&workday_id, &organization.id()?)
            .await?
            .ok_or_else(|| ApiError::not_found("Workday not found"))?;

        if let Some(notes) = data.notes {
            workday.notes = notes;
        }

        let mut removed_timeslots = Vec::new();
        if let Some(inputs) = data.timeslots {
            validate_timeslots(&inputs)
                .map_err(|errors| to_api_error(errors, "Invalid workday data"))?;

            let replacement = merge_timeslots(&workday, &inputs)?;
            removed_timeslots = removed_timeslot_ids(&workday.timeslots, &replacement);
            workday.timeslots = replacement;
        }

        let workday = self.commit(workday).await?;

        // Sales tied to dropped timeslots go with them. Cascading only after
        // the versioned write keeps a concurrency conflict side-effect free.
        for timeslot_id in &removed_timeslots {
            self.sale_repository.delete_by_timeslot(timeslot_id).await?;
        }

        Ok(workday)
    }

    pub async fn delete_workday(
        &self,
        caller: &AuthenticatedUser,
        workday_id: &str,
    ) -> Result<(), ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageSchedule)?;

        let workday_id = ObjectId::parse_str(workday_id)
            .map_err(|_| ApiError::bad_request("Invalid workday id"))?;
        let workday = self
            .workday_repository
            .find_by_id_for_org(&workday_id, &organization.id()?)
            .await?
            .ok_or_else(|| ApiError::not_found("Workday not found"))?;

        // Sales first: a crash in between leaves a saleless workday rather
        // than orphaned sales.
        let deleted_sales = self.sale_repository.delete_by_workday(&workday.id()?).await?;
        self.workday_repository.delete(&workday.id()?).await?;

        info!(
            "workday {} deleted along with {} sale(s)",
            workday.date, deleted_sales
        );
        Ok(())
    }

    pub async fn assign_timeslot(
        &self,
        caller: &AuthenticatedUser,
        workday_id: &str,
        timeslot_id: &str,
        data: AssignRequest,
    ) -> Result<Workday, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageSchedule)?;

        let workday_id = ObjectId::parse_str(workday_id)
            .map_err(|_| ApiError::bad_request("Invalid workday id"))?;
        let timeslot_id = ObjectId::parse_str(timeslot_id)
            .map_err(|_| ApiError::bad_request("Invalid timeslot id"))?;
        let target = ObjectId::parse_str(&data.user_id)
            .map_err(|_| ApiError::bad_request("Invalid user id"))?;

        if data.action == AssignAction::Assign && !organization.is_member(&target) {
            return Err(ApiError::bad_request(
                "User is not a member of this organization",
            ));
        }

        let mut workday = self
            .workday_repository
            .find_by_id_for_org(&workday_id, &organization.id()?)
            .await?
            .ok_or_else(|| ApiError::not_found("Workday not found"))?;
        let timeslot = workday
            .timeslot_mut(&timeslot_id)
            .ok_or_else(|| ApiError::not_found("Timeslot not found"))?;

        match data.action {
            AssignAction::Assign => timeslot.assign(target, data.notes)?,
            AssignAction::Remove => timeslot.unassign(&target),
        }

        self.commit(workday).await
    }

    pub async fn delete_timeslot(
        &self,
        caller: &AuthenticatedUser,
        workday_id: &str,
        timeslot_id: &str,
    ) -> Result<Workday, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageSchedule)?;

        let workday_id = ObjectId::parse_str(workday_id)
            .map_err(|_| ApiError::bad_request("Invalid workday id"))?;
        let timeslot_id = ObjectId::parse_str(timeslot_id)
            .map_err(|_| ApiError::bad_request("Invalid timeslot id"))?;

        let mut workday = self
            .workday_repository
            .find_by_id_for_org(&workday_id, &organization.id()?)
            .await?
            .ok_or_else(|| ApiError::not_found("Workday not found"))?;

        if workday.timeslot(&timeslot_id).is_none() {
            return Err(ApiError::not_found("Timeslot not found"));
        }

        workday.timeslots.retain(|slot| slot._id != timeslot_id);

        let workday = self.commit(workday).await?;
        self.sale_repository.delete_by_timeslot(&timeslot_id).await?;

        Ok(workday)
    }

    /// Seeds the coming week with the default slot grid. Days that already
    /// have a workday are skipped via the (organization, date) unique index.
    pub async fn generate_workdays(&self, caller: &AuthenticatedUser) -> Result<usize, ApiError> {
        let organization = self.organization_of(caller).await?;
        organization.authorize(&caller.user_id, OrgAction::ManageOrganization)?;

        let plan = generation_plan(organization.id()?, Utc::now().date_naive());
        let created = self
            .workday_repository
            .insert_many_skip_duplicates(plan)
            .await?;

        info!("generated {created} workday(s) for {}", organization.name);
        Ok(created)
    }

    async fn commit(&self, mut workday: Workday) -> Result<Workday, ApiError> {
        let updated = self.workday_repository.update_versioned(&workday).await?;
        if !updated {
            return Err(ApiError::Conflict(
                "Workday was modified concurrently, please retry".to_string(),
            ));
        }
        workday.version += 1;
        Ok(workday)
    }
}

fn new_timeslot(input: &TimeslotInput) -> Timeslot {
    Timeslot {
        _id: ObjectId::new(),
        start_time: input.start_time.clone(),
        end_time: input.end_time.clone(),
        max_employees: input.max_employees,
        assigned_users: vec![],
    }
}

/// Replaces a workday's timeslots with the given inputs, carrying over the
/// assignments of any timeslot whose id is retained.
fn merge_timeslots(
    workday: &Workday,
    inputs: &[TimeslotInput],
) -> Result<Vec<Timeslot>, ApiError> {
    let mut replacement = Vec::with_capacity(inputs.len());

    for input in inputs {
        let existing = input
            .id
            .as_deref()
            .and_then(|hex| ObjectId::parse_str(hex).ok())
            .and_then(|id| workday.timeslot(&id).cloned());

        let mut slot = match existing {
            Some(mut slot) => {
                slot.start_time = input.start_time.clone();
                slot.end_time = input.end_time.clone();
                slot
            }
            None => new_timeslot(input),
        };

        if slot.assigned_users.len() > input.max_employees as usize {
            return Err(ApiError::bad_request(
                "Cannot reduce capacity below current assignments",
            ));
        }
        slot.max_employees = input.max_employees;
        replacement.push(slot);
    }

    Ok(replacement)
}

/// Ids present in the original timeslot list but absent from the
/// replacement, i.e. the slots whose sales must be cascaded.
fn removed_timeslot_ids(original: &[Timeslot], replacement: &[Timeslot]) -> Vec<ObjectId> {
    let kept: Vec<ObjectId> = replacement.iter().map(|slot| slot._id).collect();
    original
        .iter()
        .map(|slot| slot._id)
        .filter(|id| !kept.contains(id))
        .collect()
}

/// The fixed 7-day slot grid: five two-hour slots per day starting on the
/// even hours from 10:00, capacity 2 each.
fn generation_plan(organization_id: ObjectId, start: NaiveDate) -> Vec<Workday> {
    let now = Utc::now();
    (0..GENERATED_DAYS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let timeslots = GENERATED_SLOT_START_HOURS
                .iter()
                .map(|&hour| Timeslot {
                    _id: ObjectId::new(),
                    start_time: format!("{hour:02}:00"),
                    end_time: format!("{:02}:00", hour + GENERATED_SLOT_DURATION_HOURS),
                    max_employees: GENERATED_SLOT_CAPACITY,
                    assigned_users: vec![],
                })
                .collect();

            Workday {
                _id: None,
                organization_id,
                date,
                notes: String::new(),
                timeslots,
                version: 0,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generation_plan_covers_seven_days_with_five_slots_each() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let plan = generation_plan(ObjectId::new(), start);

        assert_eq!(plan.len(), 7);
        for (offset, workday) in plan.iter().enumerate() {
            assert_eq!(workday.date, start + Duration::days(offset as i64));
            assert_eq!(workday.timeslots.len(), 5);
            assert!(
                workday
                    .timeslots
                    .iter()
                    .all(|slot| slot.max_employees == GENERATED_SLOT_CAPACITY)
            );
        }

        let first = &plan[0].timeslots;
        assert_eq!(first[0].start_time, "10:00");
        assert_eq!(first[0].end_time, "12:00");
        assert_eq!(first[4].start_time, "18:00");
        assert_eq!(first[4].end_time, "20:00");
    }

    #[test]
    fn generation_plan_is_duplicate_free_across_runs() {
        let org = ObjectId::new();
        let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

        let mut seen: HashSet<(NaiveDate, String)> = HashSet::new();
        for workday in generation_plan(org, start) {
            for slot in &workday.timeslots {
                assert!(seen.insert((workday.date, slot.start_time.clone())));
            }
        }

        // A second run produces the same (date, start_time) pairs, so every
        // workday would be rejected by the (organization, date) unique index.
        for workday in generation_plan(org, start) {
            for slot in &workday.timeslots {
                assert!(seen.contains(&(workday.date, slot.start_time.clone())));
            }
        }
    }

    #[test]
    fn merge_keeps_assignments_of_retained_timeslots() {
        let org = ObjectId::new();
        let mut plan = generation_plan(org, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let mut workday = plan.remove(0);
        workday._id = Some(ObjectId::new());

        let assigned = ObjectId::new();
        workday.timeslots[0]
            .assign(assigned, "west route".to_string())
            .unwrap();

        let inputs = vec![
            TimeslotInput {
                id: Some(workday.timeslots[0]._id.to_hex()),
                start_time: "09:00".to_string(),
                end_time: "11:00".to_string(),
                max_employees: 3,
            },
            TimeslotInput {
                id: None,
                start_time: "11:00".to_string(),
                end_time: "13:00".to_string(),
                max_employees: 2,
            },
        ];

        let merged = merge_timeslots(&workday, &inputs).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged[0].is_assigned(&assigned));
        assert_eq!(merged[0].start_time, "09:00");
        assert_eq!(merged[0].max_employees, 3);
        assert!(merged[1].assigned_users.is_empty());
    }

    #[test]
    fn removed_timeslot_ids_lists_only_dropped_slots() {
        let org = ObjectId::new();
        let mut plan = generation_plan(org, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let workday = plan.remove(0);

        let inputs = vec![
            TimeslotInput {
                id: Some(workday.timeslots[0]._id.to_hex()),
                start_time: "10:00".to_string(),
                end_time: "12:00".to_string(),
                max_employees: 2,
            },
            TimeslotInput {
                id: None,
                start_time: "12:00".to_string(),
                end_time: "14:00".to_string(),
                max_employees: 2,
            },
        ];

        let replacement = merge_timeslots(&workday, &inputs).unwrap();
        let removed = removed_timeslot_ids(&workday.timeslots, &replacement);

        let expected: Vec<ObjectId> =
            workday.timeslots[1..].iter().map(|slot| slot._id).collect();
        assert_eq!(removed, expected);
        assert!(!removed.contains(&workday.timeslots[0]._id));
    }

    #[test]
    fn merge_rejects_capacity_below_current_assignments() {
        let org = ObjectId::new();
        let mut plan = generation_plan(org, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let mut workday = plan.remove(0);

        workday.timeslots[0]
            .assign(ObjectId::new(), String::new())
            .unwrap();
        workday.timeslots[0]
            .assign(ObjectId::new(), String::new())
            .unwrap();

        let inputs = vec![TimeslotInput {
            id: Some(workday.timeslots[0]._id.to_hex()),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            max_employees: 1,
        }];

        assert!(matches!(
            merge_timeslots(&workday, &inputs),
            Err(ApiError::BadRequest(_))
        ));
    }
}
