pub mod create_organization_request;
pub mod join_organization_request;
pub mod update_member_role_request;
