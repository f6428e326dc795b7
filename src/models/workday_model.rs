use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Assignment {
    pub user_id: ObjectId,

    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Timeslot {
    #[serde(default = "ObjectId::new")]
    pub _id: ObjectId,

    /// "HH:mm", 24-hour.
    pub start_time: String,

    /// "HH:mm", exclusive end of the range.
    pub end_time: String,

    /// Fixed assignment ceiling, 1..=10. Never mutated by sales.
    pub max_employees: u32,

    #[serde(default)]
    pub assigned_users: Vec<Assignment>,
}

impl Timeslot {
    pub fn is_assigned(&self, user_id: &ObjectId) -> bool {
        self.assigned_users
            .iter()
            .any(|assignment| &assignment.user_id == user_id)
    }

    /// Appends an assignment, upholding `assigned_users.len() <= max_employees`.
    pub fn assign(&mut self, user_id: ObjectId, notes: String) -> Result<(), ApiError> {
        if self.is_assigned(&user_id) {
            return Err(ApiError::bad_request(
                "User is already assigned to this timeslot",
            ));
        }
        if self.assigned_users.len() >= self.max_employees as usize {
            return Err(ApiError::bad_request("Timeslot is full"));
        }
        self.assigned_users.push(Assignment { user_id, notes });
        Ok(())
    }

    /// Removes the user's assignment if present. A no-op otherwise.
    pub fn unassign(&mut self, user_id: &ObjectId) {
        self.assigned_users
            .retain(|assignment| &assignment.user_id != user_id);
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Workday {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub organization_id: ObjectId,

    pub date: NaiveDate,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub timeslots: Vec<Timeslot>,

    /// Optimistic-concurrency counter, bumped on every conditional update.
    #[serde(default)]
    pub version: i64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Workday {
    pub fn id(&self) -> Result<ObjectId, ApiError> {
        self._id
            .ok_or_else(|| ApiError::Internal("Workday is missing an id".to_string()))
    }

    pub fn timeslot(&self, timeslot_id: &ObjectId) -> Option<&Timeslot> {
        self.timeslots.iter().find(|slot| &slot._id == timeslot_id)
    }

    pub fn timeslot_mut(&mut self, timeslot_id: &ObjectId) -> Option<&mut Timeslot> {
        self.timeslots
            .iter_mut()
            .find(|slot| &slot._id == timeslot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(max_employees: u32) -> Timeslot {
        Timeslot {
            _id: ObjectId::new(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            max_employees,
            assigned_users: vec![],
        }
    }

    #[test]
    fn assign_respects_capacity() {
        let mut timeslot = slot(2);
        timeslot.assign(ObjectId::new(), String::new()).unwrap();
        timeslot.assign(ObjectId::new(), String::new()).unwrap();
        assert!(timeslot.assigned_users.len() <= timeslot.max_employees as usize);

        let err = timeslot
            .assign(ObjectId::new(), String::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg == "Timeslot is full"));
        assert_eq!(timeslot.assigned_users.len(), 2);
    }

    #[test]
    fn double_assign_is_rejected() {
        let mut timeslot = slot(3);
        let user = ObjectId::new();
        timeslot.assign(user, "door knocker".to_string()).unwrap();
        let err = timeslot.assign(user, String::new()).unwrap_err();
        assert!(
            matches!(err, ApiError::BadRequest(msg) if msg == "User is already assigned to this timeslot")
        );
    }

    #[test]
    fn unassign_then_assign_restores_assignment_set() {
        let mut timeslot = slot(2);
        let user = ObjectId::new();
        timeslot.assign(user, "north side".to_string()).unwrap();
        timeslot.unassign(&user);
        assert!(!timeslot.is_assigned(&user));

        timeslot.assign(user, "north side".to_string()).unwrap();
        assert!(timeslot.is_assigned(&user));
        assert_eq!(timeslot.assigned_users.len(), 1);
    }

    #[test]
    fn unassign_of_absent_user_is_a_noop() {
        let mut timeslot = slot(1);
        timeslot.assign(ObjectId::new(), String::new()).unwrap();
        timeslot.unassign(&ObjectId::new());
        assert_eq!(timeslot.assigned_users.len(), 1);
    }
}
