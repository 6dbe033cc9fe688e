use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::models::{LocationAttribute, LocationStatus, LocationUsage, TimeSlot};
use crate::modules::availability::time_window::{day_of_week_in_range, slots_overlap};

/// Outcome of checking a proposed slot against a room's configuration and
/// its existing occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum AvailabilityVerdict {
    /// The location carries no decoration; unconfigured rooms impose no
    /// restriction.
    Undecorated,
    /// A schedule window covers the slot, or the decoration is not
    /// schedule-restricted.
    Available {
        usage: LocationUsage,
        allowed_parties: BTreeSet<String>,
    },
    /// Windows are configured but none contains the proposed slot.
    OutsideSchedule,
    /// The slot overlaps an existing appointment in the same room.
    Occupied,
}

impl AvailabilityVerdict {
    pub fn permits_booking(&self) -> bool {
        matches!(
            self,
            AvailabilityVerdict::Undecorated | AvailabilityVerdict::Available { .. }
        )
    }
}

/// Answers "is this room open to the proposed slot under its configuration?".
/// A window matches when its inclusive day range contains the slot's day and
/// its time range contains the whole of `[slot.start, slot.end)`. Inactive
/// decorations are not in force and behave like undecorated rooms.
pub fn is_available(
    attribute: Option<&LocationAttribute>,
    slot: &TimeSlot,
) -> AvailabilityVerdict {
    let Some(attribute) = attribute else {
        return AvailabilityVerdict::Undecorated;
    };
    if attribute.status == LocationStatus::Inactive {
        return AvailabilityVerdict::Undecorated;
    }
    if attribute.usage != LocationUsage::Schedule {
        return AvailabilityVerdict::Available {
            usage: attribute.usage,
            allowed_parties: attribute.allowed_parties.clone(),
        };
    }

    let day = slot.day_of_week();
    let matched = attribute.schedule.iter().find(|window| {
        day_of_week_in_range(day, window.start_day_of_week, window.end_day_of_week)
            && slot.start_time() >= window.start_time
            && slot.end_time() <= window.end_time
    });

    match matched {
        Some(window) => AvailabilityVerdict::Available {
            usage: window.usage,
            allowed_parties: window.allowed_parties.clone(),
        },
        None => {
            debug!(
                location_key = %attribute.location_key,
                day,
                "proposed slot falls outside all schedule windows"
            );
            AvailabilityVerdict::OutsideSchedule
        }
    }
}

/// Full conflict check for a proposed slot: existing occupancy first, then
/// the schedule. The occupancy snapshot is supplied by the caller so the
/// caller controls isolation against concurrent bookings.
pub fn check_conflict(
    proposed: &TimeSlot,
    existing_occupancy: &[TimeSlot],
    attribute: Option<&LocationAttribute>,
) -> AvailabilityVerdict {
    if existing_occupancy
        .iter()
        .any(|occupied| slots_overlap(proposed, occupied))
    {
        return AvailabilityVerdict::Occupied;
    }
    is_available(attribute, proposed)
}
