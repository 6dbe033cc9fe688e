use serde_json::json;
use std::collections::HashMap;
use time::{Date, Time};
use tracing::debug;

use crate::config::NotificationConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Appointment, Booking, BookingAction, BookingType, Contact, ContactType, Prisoner};
use crate::modules::notifications::templates::{
    NotificationInstruction, NotificationVariant, RecipientRole,
};

use NotificationVariant::*;

type RoutingTable = HashMap<(BookingAction, BookingType), NotificationVariant>;

/// Everything a single routing decision needs, resolved by the caller. The
/// router itself holds no per-booking state and may be shared across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct RoutingContext<'a> {
    pub booking: &'a Booking,
    pub contact: &'a Contact,
    pub prisoner: &'a Prisoner,
    pub prison_name: &'a str,
    /// Court name or probation team name, matching the booking type.
    pub agency_name: &'a str,
    /// Location key to human-readable room description.
    pub locations: &'a HashMap<String, String>,
}

pub struct NotificationRouter {
    administration_emails: Vec<String>,
    user_table: RoutingTable,
    court_table: RoutingTable,
    probation_table: RoutingTable,
    prison_table: RoutingTable,
}

impl NotificationRouter {
    /// Builds the per-role routing tables once; they are never mutated
    /// afterwards. The administration copy list is threaded in here rather
    /// than read from the environment at decision time.
    pub fn new(config: NotificationConfig) -> Self {
        use BookingAction::*;
        use BookingType::*;

        let user_table = HashMap::from([
            ((Create, Court), NewCourtBookingUserEmail),
            ((Amend, Court), AmendedCourtBookingUserEmail),
            ((Cancel, Court), CancelledCourtBookingUserEmail),
            ((Create, Probation), NewProbationBookingUserEmail),
            ((Amend, Probation), AmendedProbationBookingUserEmail),
            ((Cancel, Probation), CancelledProbationBookingUserEmail),
        ]);
        // Released/Transferred never reach the user table: the requester
        // initiated Create/Amend/Cancel themselves, while prisoner-movement
        // events are surfaced to the agency and the prison instead.
        let court_table = HashMap::from([
            ((Create, Court), NewCourtBookingCourtEmail),
            ((Released, Court), ReleasedCourtBookingCourtEmail),
            ((Transferred, Court), TransferredCourtBookingCourtEmail),
        ]);
        let probation_table = HashMap::from([
            ((Create, Probation), NewProbationBookingProbationEmail),
            ((Released, Probation), ReleasedProbationBookingProbationEmail),
            ((Transferred, Probation), TransferredProbationBookingProbationEmail),
        ]);
        let prison_table = HashMap::from([
            ((Create, Court), NewCourtBookingPrisonEmail),
            ((Released, Court), ReleasedCourtBookingPrisonEmail),
            ((Transferred, Court), TransferredCourtBookingPrisonEmail),
            ((Create, Probation), NewProbationBookingPrisonEmail),
            ((Released, Probation), ReleasedProbationBookingPrisonEmail),
            ((Transferred, Probation), TransferredProbationBookingPrisonEmail),
        ]);

        NotificationRouter {
            administration_emails: config.administration_emails,
            user_table,
            court_table,
            probation_table,
            prison_table,
        }
    }

    /// Decides which notification, if any, a transition produces for the
    /// given recipient role. Absence of a mapping is a valid business
    /// outcome (`Ok(None)`), not an error; contract violations are
    /// [`AppError::Argument`].
    pub fn route(
        &self,
        action: BookingAction,
        role: RecipientRole,
        ctx: &RoutingContext<'_>,
    ) -> AppResult<Option<NotificationInstruction>> {
        let expected_contact_type = match role {
            RecipientRole::User => ContactType::User,
            RecipientRole::Court => ContactType::Court,
            RecipientRole::Probation => ContactType::Probation,
            RecipientRole::Prison => ContactType::Prison,
        };
        if ctx.contact.contact_type != expected_contact_type {
            return Err(AppError::Argument(format!(
                "incorrect contact type {} for {} email",
                ctx.contact.contact_type, role
            )));
        }
        match role {
            RecipientRole::Court if !ctx.booking.is_court_booking() => {
                return Err(AppError::Argument(format!(
                    "booking {} is not a court booking",
                    ctx.booking.id
                )));
            }
            RecipientRole::Probation if !ctx.booking.is_probation_booking() => {
                return Err(AppError::Argument(format!(
                    "booking {} is not a probation booking",
                    ctx.booking.id
                )));
            }
            _ => {}
        }

        let table = match role {
            RecipientRole::User => &self.user_table,
            RecipientRole::Court => &self.court_table,
            RecipientRole::Probation => &self.probation_table,
            RecipientRole::Prison => &self.prison_table,
        };
        let Some(variant) = table.get(&(action, ctx.booking.booking_type)) else {
            debug!(?action, %role, booking_id = %ctx.booking.id, "no notification mapped");
            return Ok(None);
        };

        let cc = match (role, action) {
            (RecipientRole::Prison, BookingAction::Released | BookingAction::Transferred) => {
                self.administration_emails.clone()
            }
            _ => Vec::new(),
        };

        Ok(Some(NotificationInstruction {
            variant: *variant,
            recipient_email: ctx.contact.email.clone(),
            cc,
            personalisation: personalisation(ctx),
        }))
    }
}

fn personalisation(ctx: &RoutingContext<'_>) -> serde_json::Value {
    let room_name = |appointment: &Appointment| {
        ctx.locations
            .get(&appointment.location_key)
            .cloned()
            .unwrap_or_else(|| appointment.location_key.clone())
    };
    let slot_json = |appointment: &Appointment| {
        json!({
            "room": room_name(appointment),
            "start": format_time(appointment.start_time),
            "end": format_time(appointment.end_time),
        })
    };

    json!({
        "recipientName": ctx.contact.name,
        "prisonerName": ctx.prisoner.full_name(),
        "prisonerNumber": ctx.prisoner.prisoner_number,
        "prison": ctx.prison_name,
        "agency": ctx.agency_name,
        "date": ctx.booking.main_appointment().map(|a| format_date(a.date)),
        "preAppointment": ctx.booking.pre_appointment().map(&slot_json),
        "mainAppointment": ctx.booking.main_appointment().map(&slot_json),
        "postAppointment": ctx.booking.post_appointment().map(&slot_json),
        "comments": ctx.booking.comments,
    })
}

fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};
    use uuid::Uuid;

    use crate::models::AppointmentType;

    fn appointment(booking_id: Uuid, kind: AppointmentType, start: Time, end: Time) -> Appointment {
        Appointment {
            booking_id,
            prison_code: "MDI".to_string(),
            prisoner_number: "A1234AA".to_string(),
            location_key: "MDI-VCC-1".to_string(),
            appointment_type: kind,
            date: date!(2024 - 07 - 03),
            start_time: start,
            end_time: end,
            comments: None,
        }
    }

    fn court_booking() -> Booking {
        let id = Uuid::new_v4();
        Booking::new(
            BookingType::Court,
            Some("ABERCV".to_string()),
            None,
            "court-user".to_string(),
            false,
            Some("wheelchair access required".to_string()),
            vec![
                appointment(id, AppointmentType::Pre, time!(09:45), time!(10:00)),
                appointment(id, AppointmentType::Main, time!(10:00), time!(11:00)),
                appointment(id, AppointmentType::Post, time!(11:00), time!(11:15)),
            ],
        )
        .unwrap()
    }

    fn probation_booking() -> Booking {
        let id = Uuid::new_v4();
        Booking::new(
            BookingType::Probation,
            None,
            Some("N55".to_string()),
            "probation-user".to_string(),
            false,
            None,
            vec![appointment(id, AppointmentType::Main, time!(14:00), time!(15:00))],
        )
        .unwrap()
    }

    fn contact(booking_id: Uuid, contact_type: ContactType) -> Contact {
        Contact {
            booking_id,
            contact_type,
            name: Some("Jo Bloggs".to_string()),
            email: "jo.bloggs@example.com".to_string(),
            telephone: None,
            position: None,
        }
    }

    fn prisoner() -> Prisoner {
        Prisoner {
            prisoner_number: "A1234AA".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
        }
    }

    fn router() -> NotificationRouter {
        NotificationRouter::new(NotificationConfig {
            administration_emails: vec!["admin@justice.example.com".to_string()],
        })
    }

    fn ctx<'a>(
        booking: &'a Booking,
        contact: &'a Contact,
        prisoner: &'a Prisoner,
        locations: &'a HashMap<String, String>,
    ) -> RoutingContext<'a> {
        RoutingContext {
            booking,
            contact,
            prisoner,
            prison_name: "Moorland",
            agency_name: "Aberystwyth Civil Court",
            locations,
        }
    }

    #[test]
    fn create_routes_a_user_email_for_a_court_booking() {
        let booking = court_booking();
        let contact = contact(booking.id, ContactType::User);
        let prisoner = prisoner();
        let locations = HashMap::from([(
            "MDI-VCC-1".to_string(),
            "Video Court Room 1".to_string(),
        )]);
        let instruction = router()
            .route(
                BookingAction::Create,
                RecipientRole::User,
                &ctx(&booking, &contact, &prisoner, &locations),
            )
            .unwrap()
            .expect("a user email is mapped for CREATE");
        assert_eq!(instruction.variant, NewCourtBookingUserEmail);
        assert_eq!(instruction.recipient_email, "jo.bloggs@example.com");
        assert!(instruction.cc.is_empty());
        assert_eq!(instruction.personalisation["prisonerName"], "John Smith");
        assert_eq!(instruction.personalisation["date"], "03/07/2024");
        assert_eq!(
            instruction.personalisation["mainAppointment"]["room"],
            "Video Court Room 1"
        );
        assert_eq!(instruction.personalisation["mainAppointment"]["start"], "10:00");
    }

    #[test]
    fn amend_maps_no_court_email() {
        let booking = court_booking();
        let contact = contact(booking.id, ContactType::Court);
        let prisoner = prisoner();
        let locations = HashMap::new();
        let routed = router()
            .route(
                BookingAction::Amend,
                RecipientRole::Court,
                &ctx(&booking, &contact, &prisoner, &locations),
            )
            .unwrap();
        assert!(routed.is_none());
    }

    #[test]
    fn released_is_never_surfaced_to_the_user() {
        let booking = court_booking();
        let contact = contact(booking.id, ContactType::User);
        let prisoner = prisoner();
        let locations = HashMap::new();
        let routed = router()
            .route(
                BookingAction::Released,
                RecipientRole::User,
                &ctx(&booking, &contact, &prisoner, &locations),
            )
            .unwrap();
        assert!(routed.is_none());
    }

    #[test]
    fn released_routes_to_court_and_prison() {
        let booking = court_booking();
        let prisoner = prisoner();
        let locations = HashMap::new();

        let court_contact = contact(booking.id, ContactType::Court);
        let to_court = router()
            .route(
                BookingAction::Released,
                RecipientRole::Court,
                &ctx(&booking, &court_contact, &prisoner, &locations),
            )
            .unwrap()
            .unwrap();
        assert_eq!(to_court.variant, ReleasedCourtBookingCourtEmail);

        let prison_contact = contact(booking.id, ContactType::Prison);
        let to_prison = router()
            .route(
                BookingAction::Released,
                RecipientRole::Prison,
                &ctx(&booking, &prison_contact, &prisoner, &locations),
            )
            .unwrap()
            .unwrap();
        assert_eq!(to_prison.variant, ReleasedCourtBookingPrisonEmail);
        assert_eq!(to_prison.cc, vec!["admin@justice.example.com".to_string()]);
    }

    #[test]
    fn probation_tables_mirror_the_court_tables() {
        let booking = probation_booking();
        let prisoner = prisoner();
        let locations = HashMap::new();

        let user_contact = contact(booking.id, ContactType::User);
        let to_user = router()
            .route(
                BookingAction::Cancel,
                RecipientRole::User,
                &ctx(&booking, &user_contact, &prisoner, &locations),
            )
            .unwrap()
            .unwrap();
        assert_eq!(to_user.variant, CancelledProbationBookingUserEmail);

        let team_contact = contact(booking.id, ContactType::Probation);
        let to_team = router()
            .route(
                BookingAction::Transferred,
                RecipientRole::Probation,
                &ctx(&booking, &team_contact, &prisoner, &locations),
            )
            .unwrap()
            .unwrap();
        assert_eq!(to_team.variant, TransferredProbationBookingProbationEmail);
    }

    #[test]
    fn mismatched_contact_type_is_an_argument_error() {
        let booking = court_booking();
        let wrong = contact(booking.id, ContactType::Prison);
        let prisoner = prisoner();
        let locations = HashMap::new();
        let err = router()
            .route(
                BookingAction::Create,
                RecipientRole::Court,
                &ctx(&booking, &wrong, &prisoner, &locations),
            )
            .unwrap_err();
        match err {
            AppError::Argument(msg) => {
                assert!(msg.contains("incorrect contact type PRISON for court email"));
            }
            other => panic!("expected argument error, got {:?}", other),
        }
    }

    #[test]
    fn probation_booking_is_rejected_by_the_court_table() {
        let booking = probation_booking();
        let contact = contact(booking.id, ContactType::Court);
        let prisoner = prisoner();
        let locations = HashMap::new();
        let err = router()
            .route(
                BookingAction::Create,
                RecipientRole::Court,
                &ctx(&booking, &contact, &prisoner, &locations),
            )
            .unwrap_err();
        match err {
            AppError::Argument(msg) => {
                assert!(msg.contains(&format!("booking {} is not a court booking", booking.id)));
            }
            other => panic!("expected argument error, got {:?}", other),
        }
    }
}
