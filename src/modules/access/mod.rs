//! Request-scoped access predicates. Each guard is a no-op for identity
//! variants the rule does not apply to, so the two compose in either order.

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Booking, BookingType, User};

/// Prison staff may only act on the prison in their active caseload.
/// External and service identities are out of scope and always pass.
pub fn check_caseload_access(user: &User, prison_code: &str) -> AppResult<()> {
    if let User::Prison {
        active_case_load_id,
        ..
    } = user
    {
        if active_case_load_id != prison_code {
            debug!(username = %user.username(), prison_code, "caseload access rejected");
            return Err(AppError::CaseloadAccess(format!(
                "user {} does not have access to prison {}",
                user.username(),
                prison_code
            )));
        }
    }
    Ok(())
}

/// External users may only touch bookings of their own agency kind: court
/// users see court bookings, probation users see probation bookings. Prison
/// and service identities always pass.
pub fn check_video_booking_access(user: &User, booking: &Booking) -> AppResult<()> {
    if let User::External {
        is_court_user,
        is_probation_user,
        ..
    } = user
    {
        let permitted = (*is_court_user && booking.booking_type == BookingType::Court)
            || (*is_probation_user && booking.booking_type == BookingType::Probation);
        if !permitted {
            debug!(username = %user.username(), booking_id = %booking.id, "video booking access rejected");
            return Err(AppError::VideoBookingAccess(format!(
                "user {} does not have access to {} booking {}",
                user.username(),
                booking.booking_type,
                booking.id
            )));
        }
    }
    Ok(())
}
