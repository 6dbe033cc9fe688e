//! Administration of room decorations and their weekly schedules. All
//! operations take the current decoration snapshot and return the updated
//! record; the caller owns the transactional boundary around read and write.

use tracing::info;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{
    AmendLocationDecoration, LocationAttribute, LocationUsage, NewLocationDecoration,
    NewScheduleRow, WeeklyAvailabilityWindow,
};

/// Attaches a decoration to an undecorated location. A location is decorated
/// at most once; later changes go through [`amend`] or [`add_schedule`].
pub fn decorate(
    existing: Option<&LocationAttribute>,
    request: NewLocationDecoration,
) -> AppResult<LocationAttribute> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "location {} is already decorated",
            request.location_key
        )));
    }
    info!(
        location_key = %request.location_key,
        created_by = %request.created_by,
        "decorating location"
    );
    Ok(LocationAttribute {
        location_key: request.location_key,
        prison_code: request.prison_code,
        status: request.status,
        usage: request.usage,
        prison_video_url: request.prison_video_url,
        allowed_parties: request.allowed_parties,
        comments: request.comments,
        schedule: Vec::new(),
    })
}

/// Replaces every decoration field in full; the schedule rows are managed
/// separately and survive the amendment untouched.
pub fn amend(
    existing: Option<LocationAttribute>,
    request: AmendLocationDecoration,
) -> AppResult<LocationAttribute> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let Some(mut attribute) = existing else {
        return Err(AppError::NotFound(
            "location is not decorated, nothing to amend".to_string(),
        ));
    };
    info!(
        location_key = %attribute.location_key,
        amended_by = %request.amended_by,
        "amending location decoration"
    );
    attribute.status = request.status;
    attribute.usage = request.usage;
    attribute.prison_video_url = request.prison_video_url;
    attribute.allowed_parties = request.allowed_parties;
    attribute.comments = request.comments;
    Ok(attribute)
}

/// Appends a weekly schedule row to a schedule-restricted decoration.
pub fn add_schedule(
    existing: Option<LocationAttribute>,
    row: NewScheduleRow,
) -> AppResult<LocationAttribute> {
    row.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let Some(mut attribute) = existing else {
        return Err(AppError::NotFound(
            "location is not decorated, cannot add a schedule row".to_string(),
        ));
    };
    if attribute.usage != LocationUsage::Schedule {
        return Err(AppError::Validation(
            "location usage must be SCHEDULE to add a row".to_string(),
        ));
    }
    // Wrap-around day ranges (e.g. Fri-Mon) are not supported.
    if row.start_day_of_week > row.end_day_of_week {
        return Err(AppError::Validation(format!(
            "start day {} must not be after end day {}",
            row.start_day_of_week, row.end_day_of_week
        )));
    }
    if row.start_time >= row.end_time {
        return Err(AppError::Validation(format!(
            "schedule start time {} must be before end time {}",
            row.start_time, row.end_time
        )));
    }
    info!(
        location_key = %attribute.location_key,
        created_by = %row.created_by,
        "adding schedule row"
    );
    attribute.schedule.push(WeeklyAvailabilityWindow {
        usage: row.usage,
        start_day_of_week: row.start_day_of_week,
        end_day_of_week: row.end_day_of_week,
        start_time: row.start_time,
        end_time: row.end_time,
        allowed_parties: row.allowed_parties,
        notes: row.notes,
        created_by: row.created_by,
    });
    Ok(attribute)
}
