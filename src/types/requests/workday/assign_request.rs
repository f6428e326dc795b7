use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssignAction {
    Assign,
    Remove,
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    /// Hex id of the member being assigned or removed.
    pub user_id: String,

    #[serde(default)]
    pub notes: String,

    pub action: AssignAction,
}
