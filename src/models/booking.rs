use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, OffsetDateTime, Time};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Court,
    Probation,
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingType::Court => f.write_str("COURT"),
            BookingType::Probation => f.write_str("PROBATION"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

/// The lifecycle transition that just occurred. Never persisted on the
/// booking; passed contextually to the notification router at the moment of
/// the transition. Create/Amend/Cancel are user-initiated; Released and
/// Transferred arrive from prisoner-movement events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Create,
    Amend,
    Cancel,
    Released,
    Transferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    Pre,
    Main,
    Post,
}

/// A single prisoner/location/time-slot entry belonging to a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub booking_id: Uuid,
    pub prison_code: String,
    pub prisoner_number: String,
    pub location_key: String,
    pub appointment_type: AppointmentType,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub comments: Option<String>,
}

impl Appointment {
    pub fn time_slot(&self) -> AppResult<TimeSlot> {
        TimeSlot::new(self.date, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub booking_type: BookingType,
    pub status: BookingStatus,
    /// Set iff booking_type is Court.
    pub court_code: Option<String>,
    /// Set iff booking_type is Probation.
    pub probation_team_code: Option<String>,
    pub created_by: String,
    pub created_by_prison: bool,
    pub created_at: OffsetDateTime,
    pub amended_by: Option<String>,
    pub amended_at: Option<OffsetDateTime>,
    pub comments: Option<String>,
    pub appointments: Vec<Appointment>,
}

impl Booking {
    /// Builds an active booking, enforcing the structural invariants: the
    /// court/probation reference must match the type, and an active booking
    /// carries at least one appointment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        booking_type: BookingType,
        court_code: Option<String>,
        probation_team_code: Option<String>,
        created_by: String,
        created_by_prison: bool,
        comments: Option<String>,
        appointments: Vec<Appointment>,
    ) -> AppResult<Self> {
        match booking_type {
            BookingType::Court if court_code.is_none() || probation_team_code.is_some() => {
                return Err(AppError::Validation(
                    "a court booking requires a court code and no probation team".to_string(),
                ));
            }
            BookingType::Probation if probation_team_code.is_none() || court_code.is_some() => {
                return Err(AppError::Validation(
                    "a probation booking requires a probation team and no court code".to_string(),
                ));
            }
            _ => {}
        }
        if appointments.is_empty() {
            return Err(AppError::Validation(
                "an active booking must have at least one appointment".to_string(),
            ));
        }
        Ok(Booking {
            id: Uuid::new_v4(),
            booking_type,
            status: BookingStatus::Active,
            court_code,
            probation_team_code,
            created_by,
            created_by_prison,
            created_at: OffsetDateTime::now_utc(),
            amended_by: None,
            amended_at: None,
            comments,
            appointments,
        })
    }

    pub fn is_court_booking(&self) -> bool {
        self.booking_type == BookingType::Court
    }

    pub fn is_probation_booking(&self) -> bool {
        self.booking_type == BookingType::Probation
    }

    /// Cancellation keeps the appointments for audit history.
    pub fn cancel(&mut self, cancelled_by: &str) {
        self.status = BookingStatus::Cancelled;
        self.amended_by = Some(cancelled_by.to_string());
        self.amended_at = Some(OffsetDateTime::now_utc());
    }

    pub fn pre_appointment(&self) -> Option<&Appointment> {
        self.appointment_of_type(AppointmentType::Pre)
    }

    pub fn main_appointment(&self) -> Option<&Appointment> {
        self.appointment_of_type(AppointmentType::Main)
    }

    pub fn post_appointment(&self) -> Option<&Appointment> {
        self.appointment_of_type(AppointmentType::Post)
    }

    fn appointment_of_type(&self, kind: AppointmentType) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.appointment_type == kind)
    }
}

/// Request payload for booking creation; cross-field rules live in
/// `validate_request` because they span the whole payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub booking_type: BookingType,
    pub court_code: Option<String>,
    pub probation_team_code: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
    pub created_by_prison: bool,
    #[validate(length(max = 400))]
    pub comments: Option<String>,
    #[validate(length(min = 1, message = "At least one appointment is required"))]
    pub appointments: Vec<NewAppointment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewAppointment {
    #[validate(length(min = 1))]
    pub prison_code: String,
    #[validate(length(min = 1))]
    pub prisoner_number: String,
    #[validate(length(min = 1))]
    pub location_key: String,
    pub appointment_type: AppointmentType,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    #[validate(length(max = 400))]
    pub comments: Option<String>,
}

impl CreateBookingRequest {
    pub fn validate_request(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        match self.booking_type {
            BookingType::Court if self.court_code.is_none() => {
                return Err(AppError::Validation(
                    "court code is required for a court booking".to_string(),
                ));
            }
            BookingType::Probation if self.probation_team_code.is_none() => {
                return Err(AppError::Validation(
                    "probation team code is required for a probation booking".to_string(),
                ));
            }
            _ => {}
        }
        for appointment in &self.appointments {
            if appointment.start_time >= appointment.end_time {
                return Err(AppError::Validation(format!(
                    "appointment start time {} must be before end time {}",
                    appointment.start_time, appointment.end_time
                )));
            }
        }
        Ok(())
    }
}
