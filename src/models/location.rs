use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Time;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationUsage {
    Court,
    Probation,
    /// No usage restriction beyond decoration metadata.
    Unrestricted,
    /// Availability governed by the weekly schedule rows.
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    Active,
    Inactive,
}

/// One row of a room's weekly schedule. Day range is inclusive and must not
/// wrap the week boundary; rows are owned exclusively by a LocationAttribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailabilityWindow {
    pub usage: LocationUsage,
    pub start_day_of_week: u8,
    pub end_day_of_week: u8,
    pub start_time: Time,
    pub end_time: Time,
    pub allowed_parties: BTreeSet<String>,
    pub notes: Option<String>,
    pub created_by: String,
}

/// Extra metadata attached to a physical room ("decorated room"). A location
/// without one is undecorated and imposes no availability restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAttribute {
    pub location_key: String,
    pub prison_code: String,
    pub status: LocationStatus,
    pub usage: LocationUsage,
    pub prison_video_url: Option<String>,
    pub allowed_parties: BTreeSet<String>,
    pub comments: Option<String>,
    pub schedule: Vec<WeeklyAvailabilityWindow>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewLocationDecoration {
    #[validate(length(min = 1))]
    pub location_key: String,
    #[validate(length(min = 1))]
    pub prison_code: String,
    pub status: LocationStatus,
    pub usage: LocationUsage,
    #[validate(url)]
    pub prison_video_url: Option<String>,
    pub allowed_parties: BTreeSet<String>,
    #[validate(length(max = 400))]
    pub comments: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
}

/// Full replacement of the decoration fields; partial merge is not supported.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AmendLocationDecoration {
    pub status: LocationStatus,
    pub usage: LocationUsage,
    #[validate(url)]
    pub prison_video_url: Option<String>,
    pub allowed_parties: BTreeSet<String>,
    #[validate(length(max = 400))]
    pub comments: Option<String>,
    #[validate(length(min = 1))]
    pub amended_by: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewScheduleRow {
    pub usage: LocationUsage,
    #[validate(range(min = 1, max = 7, message = "Day of week must be between 1 and 7"))]
    pub start_day_of_week: u8,
    #[validate(range(min = 1, max = 7, message = "Day of week must be between 1 and 7"))]
    pub end_day_of_week: u8,
    pub start_time: Time,
    pub end_time: Time,
    pub allowed_parties: BTreeSet<String>,
    #[validate(length(max = 400))]
    pub notes: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
}
