use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    User,
    Court,
    Probation,
    Prison,
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContactType::User => "USER",
            ContactType::Court => "COURT",
            ContactType::Probation => "PROBATION",
            ContactType::Prison => "PRISON",
        };
        f.write_str(s)
    }
}

/// Someone to notify about a booking. Routing input only; the core never
/// creates or alters contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub booking_id: Uuid,
    pub contact_type: ContactType,
    pub name: Option<String>,
    pub email: String,
    pub telephone: Option<String>,
    pub position: Option<String>,
}

/// Prisoner details resolved by the prisoner-search collaborator, carried
/// into notification personalisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prisoner {
    pub prisoner_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl Prisoner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
