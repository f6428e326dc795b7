use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Owner,
    Manager,
    Employee,
}

impl Role {
    pub fn can_manage_schedule(self) -> bool {
        matches!(self, Role::Owner | Role::Manager)
    }
}
