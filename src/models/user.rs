use serde::{Deserialize, Serialize};

/// Request-scoped identity, resolved by the surrounding authentication layer
/// before it reaches the core. The access guards switch on the variant tag;
/// no identity is ever mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum User {
    /// Prison staff, scoped to the prison in their active caseload.
    Prison {
        username: String,
        active_case_load_id: String,
    },
    /// Court or probation-team staff outside the prison estate.
    External {
        username: String,
        is_court_user: bool,
        is_probation_user: bool,
    },
    /// Trusted internal service identity, unrestricted.
    Service { name: String },
}

impl User {
    pub fn username(&self) -> &str {
        match self {
            User::Prison { username, .. } => username,
            User::External { username, .. } => username,
            User::Service { name } => name,
        }
    }
}
