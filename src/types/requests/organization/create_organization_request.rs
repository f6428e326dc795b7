use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,
}
