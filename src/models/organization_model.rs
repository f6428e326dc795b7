use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::role::Role;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrganizationMember {
    pub user_id: ObjectId,

    pub role: Role,

    #[serde(default = "Utc::now")]
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Six-character join code, unique across organizations.
    pub code: String,

    pub owner_id: ObjectId,

    #[serde(default)]
    pub members: Vec<OrganizationMember>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Capability required by an organization-scoped operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgAction {
    ViewSchedule,
    ManageSchedule,
    RecordSale,
    ManageOrganization,
}

impl Organization {
    pub fn id(&self) -> Result<ObjectId, ApiError> {
        self._id
            .ok_or_else(|| ApiError::Internal("Organization is missing an id".to_string()))
    }

    pub fn role_of(&self, user_id: &ObjectId) -> Option<Role> {
        if &self.owner_id == user_id {
            return Some(Role::Owner);
        }
        self.members
            .iter()
            .find(|member| &member.user_id == user_id)
            .map(|member| member.role)
    }

    pub fn is_member(&self, user_id: &ObjectId) -> bool {
        self.role_of(user_id).is_some()
    }

    /// Single authorization predicate for every organization-scoped operation.
    pub fn authorize(&self, user_id: &ObjectId, action: OrgAction) -> Result<Role, ApiError> {
        let role = self.role_of(user_id).ok_or_else(|| {
            ApiError::not_found("Not associated with an organization")
        })?;

        let allowed = match action {
            OrgAction::ViewSchedule | OrgAction::RecordSale => true,
            OrgAction::ManageSchedule => role.can_manage_schedule(),
            OrgAction::ManageOrganization => role == Role::Owner,
        };

        if allowed {
            Ok(role)
        } else {
            let msg = match action {
                OrgAction::ManageSchedule => "Only owners and managers may modify the schedule",
                OrgAction::ManageOrganization => "Only the organization owner may do this",
                _ => "Not allowed",
            };
            Err(ApiError::Forbidden(msg.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_with(owner: ObjectId, members: Vec<(ObjectId, Role)>) -> Organization {
        let now = Utc::now();
        Organization {
            _id: Some(ObjectId::new()),
            name: "Acme Door Sales".to_string(),
            description: String::new(),
            code: "AB12CD".to_string(),
            owner_id: owner,
            members: members
                .into_iter()
                .map(|(user_id, role)| OrganizationMember {
                    user_id,
                    role,
                    joined_at: now,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn owner_field_wins_even_without_member_entry() {
        let owner = ObjectId::new();
        let org = org_with(owner, vec![]);
        assert_eq!(org.role_of(&owner), Some(Role::Owner));
    }

    #[test]
    fn employee_may_view_and_record_but_not_manage() {
        let owner = ObjectId::new();
        let employee = ObjectId::new();
        let org = org_with(owner, vec![(employee, Role::Employee)]);

        assert!(org.authorize(&employee, OrgAction::ViewSchedule).is_ok());
        assert!(org.authorize(&employee, OrgAction::RecordSale).is_ok());
        assert!(matches!(
            org.authorize(&employee, OrgAction::ManageSchedule),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            org.authorize(&employee, OrgAction::ManageOrganization),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn manager_may_manage_schedule_but_not_organization() {
        let owner = ObjectId::new();
        let manager = ObjectId::new();
        let org = org_with(owner, vec![(manager, Role::Manager)]);

        assert!(org.authorize(&manager, OrgAction::ManageSchedule).is_ok());
        assert!(matches!(
            org.authorize(&manager, OrgAction::ManageOrganization),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn non_member_gets_not_found() {
        let org = org_with(ObjectId::new(), vec![]);
        let stranger = ObjectId::new();
        assert!(matches!(
            org.authorize(&stranger, OrgAction::ViewSchedule),
            Err(ApiError::NotFound(_))
        ));
    }
}
