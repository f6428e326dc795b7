use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::Utc;
use log::info;
use validator::ValidationErrors;

use crate::{
    constants::{ORG_CODE_LENGTH, ORG_CODE_MAX_ATTEMPTS},
    errors::{ApiError, is_duplicate_key_error},
    models::{
        organization_model::{OrgAction, Organization, OrganizationMember},
        role::Role,
    },
    repositories::{
        organization_repository::OrganizationRepository, user_repository::UserRepository,
    },
    types::{
        requests::organization::{
            create_organization_request::CreateOrganizationRequest,
            join_organization_request::JoinOrganizationRequest,
            update_member_role_request::UpdateMemberRoleRequest,
        },
        responses::organization_response::{MemberDetail, OrganizationResponse},
    },
    utils::{
        auth_utils::AuthenticatedUser,
        code_utils::generate_org_code,
        validation_utils::to_api_error,
    },
    validations::name::validate_name,
};

pub struct OrganizationService {
    organization_repository: Arc<OrganizationRepository>,
    user_repository: Arc<UserRepository>,
}

impl OrganizationService {
    pub fn new(
        organization_repository: Arc<OrganizationRepository>,
        user_repository: Arc<UserRepository>,
    ) -> Self {
        Self {
            organization_repository,
            user_repository,
        }
    }

    pub async fn create_organization(
        &self,
        caller: &AuthenticatedUser,
        data: CreateOrganizationRequest,
    ) -> Result<Organization, ApiError> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_name(&data.name) {
            errors.add("name", e);
        }
        if !errors.errors().is_empty() {
            return Err(to_api_error(errors, "Invalid organization data"));
        }

        if self
            .organization_repository
            .find_for_user(&caller.user_id)
            .await?
            .is_some()
        {
            return Err(ApiError::bad_request("You already belong to an organization"));
        }

        let now = Utc::now();
        let owner_member = OrganizationMember {
            user_id: caller.user_id,
            role: Role::Owner,
            joined_at: now,
        };

        // The code's unique index arbitrates collisions; a fresh code is
        // drawn for each attempt.
        let mut created = None;
        for _ in 0..ORG_CODE_MAX_ATTEMPTS {
            let organization = Organization {
                _id: None,
                name: data.name.clone(),
                description: data.description.clone(),
                code: generate_org_code(ORG_CODE_LENGTH),
                owner_id: caller.user_id,
                members: vec![owner_member.clone()],
                created_at: now,
                updated_at: now,
            };

            match self
                .organization_repository
                .create_organization(organization)
                .await
            {
                Ok(org) => {
                    created = Some(org);
                    break;
                }
                Err(err) if is_duplicate_key_error(&err) => continue,
                Err(err) => return Err(err.into()),
            }
        }

        let organization = created.ok_or_else(|| {
            ApiError::Internal("Could not allocate a unique organization code".to_string())
        })?;

        self.user_repository
            .set_organization(&caller.user_id, Some(&organization.id()?))
            .await?;

        info!(
            "organization '{}' created with code {}",
            organization.name, organization.code
        );
        Ok(organization)
    }

    pub async fn join_organization(
        &self,
        caller: &AuthenticatedUser,
        data: JoinOrganizationRequest,
    ) -> Result<Organization, ApiError> {
        if self
            .organization_repository
            .find_for_user(&caller.user_id)
            .await?
            .is_some()
        {
            return Err(ApiError::bad_request("You already belong to an organization"));
        }

        let code = data.code.trim().to_uppercase();
        let mut organization = self
            .organization_repository
            .find_by_code(&code)
            .await?
            .ok_or_else(|| ApiError::not_found("Invalid organization code"))?;

        let member = OrganizationMember {
            user_id: caller.user_id,
            role: Role::Employee,
            joined_at: Utc::now(),
        };
        self.organization_repository
            .push_member(&organization.id()?, &member)
            .await?;
        self.user_repository
            .set_organization(&caller.user_id, Some(&organization.id()?))
            .await?;

        organization.members.push(member);
        Ok(organization)
    }

    pub async fn get_organization(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<OrganizationResponse, ApiError> {
        let organization = self
            .organization_repository
            .find_for_user(&caller.user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Not associated with an organization"))?;

        let member_ids: Vec<ObjectId> = organization
            .members
            .iter()
            .map(|member| member.user_id)
            .collect();
        let users = self.user_repository.find_by_ids(&member_ids).await?;

        let members = organization
            .members
            .iter()
            .map(|member| {
                let user = users
                    .iter()
                    .find(|user| user._id == Some(member.user_id));
                MemberDetail {
                    user_id: member.user_id,
                    name: user.map(|u| u.name.clone()).unwrap_or_default(),
                    email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    role: member.role,
                    joined_at: member.joined_at,
                }
            })
            .collect();

        Ok(OrganizationResponse {
            id: organization.id()?.to_hex(),
            name: organization.name,
            description: organization.description,
            code: organization.code,
            owner_id: organization.owner_id,
            members,
        })
    }

    pub async fn update_member_role(
        &self,
        caller: &AuthenticatedUser,
        target_user_id: &str,
        data: UpdateMemberRoleRequest,
    ) -> Result<(), ApiError> {
        let organization = self
            .organization_repository
            .find_for_user(&caller.user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Not associated with an organization"))?;
        organization.authorize(&caller.user_id, OrgAction::ManageOrganization)?;

        let target = ObjectId::parse_str(target_user_id)
            .map_err(|_| ApiError::bad_request("Invalid user id"))?;

        if target == organization.owner_id {
            return Err(ApiError::bad_request("Cannot change the owner's role"));
        }
        if data.role == Role::Owner {
            return Err(ApiError::bad_request("Cannot promote a member to owner"));
        }

        let matched = self
            .organization_repository
            .set_member_role(&organization.id()?, &target, data.role)
            .await?;
        if !matched {
            return Err(ApiError::not_found(
                "User is not a member of this organization",
            ));
        }
        Ok(())
    }
}
