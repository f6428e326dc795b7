use serde::Deserialize;

use crate::models::role::Role;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRoleRequest {
    pub role: Role,
}
