use serde::{Deserialize, Serialize};
use std::fmt;

/// Which party a routed notification is addressed to. Distinct from
/// [`crate::models::ContactType`] only in that a role is the routing table
/// being consulted, while a contact type is what the contact record claims
/// to be; the two must agree on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRole {
    User,
    Court,
    Probation,
    Prison,
}

impl fmt::Display for RecipientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecipientRole::User => "user",
            RecipientRole::Court => "court",
            RecipientRole::Probation => "probation",
            RecipientRole::Prison => "prison",
        };
        f.write_str(s)
    }
}

/// The concrete email template selected for a lifecycle transition. One
/// variant per (role, action, booking type) combination that actually maps
/// to an email; unlisted combinations produce no notification at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationVariant {
    NewCourtBookingUserEmail,
    AmendedCourtBookingUserEmail,
    CancelledCourtBookingUserEmail,
    NewCourtBookingCourtEmail,
    ReleasedCourtBookingCourtEmail,
    TransferredCourtBookingCourtEmail,
    NewCourtBookingPrisonEmail,
    ReleasedCourtBookingPrisonEmail,
    TransferredCourtBookingPrisonEmail,
    NewProbationBookingUserEmail,
    AmendedProbationBookingUserEmail,
    CancelledProbationBookingUserEmail,
    NewProbationBookingProbationEmail,
    ReleasedProbationBookingProbationEmail,
    TransferredProbationBookingProbationEmail,
    NewProbationBookingPrisonEmail,
    ReleasedProbationBookingPrisonEmail,
    TransferredProbationBookingPrisonEmail,
}

/// A fully-decided notification, ready for the dispatcher. The core never
/// sends anything itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationInstruction {
    pub variant: NotificationVariant,
    pub recipient_email: String,
    /// Administration copies, populated for prisoner-movement notifications
    /// to the prison.
    pub cc: Vec<String>,
    pub personalisation: serde_json::Value,
}
