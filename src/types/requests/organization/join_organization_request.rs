use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JoinOrganizationRequest {
    pub code: String,
}
