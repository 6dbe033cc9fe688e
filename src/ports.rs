//! Collaborator seams. Persistence, external lookups and delivery transport
//! live behind these traits; the core only computes verdicts and routing
//! decisions from what they return.

use time::Date;

use crate::error::AppResult;
use crate::models::{LocationAttribute, TimeSlot};
use crate::modules::notifications::NotificationInstruction;

/// Supplies the occupied slots already booked against a room on a date. The
/// snapshot must be read no earlier than the start of the caller's
/// transaction, otherwise two concurrent bookings can both see a free room.
pub trait OccupancyLookup {
    fn existing_occupancy(
        &self,
        prison_code: &str,
        location_key: &str,
        date: Date,
    ) -> Vec<TimeSlot>;
}

/// Supplies a room's decoration, if any.
pub trait LocationAttributeLookup {
    fn location_attribute(&self, location_key: &str) -> Option<LocationAttribute>;
}

/// Delivers a routed notification. The core decides what to send and to
/// whom; transport failures are the dispatcher's concern.
pub trait NotificationDispatcher {
    fn dispatch(&self, instruction: &NotificationInstruction) -> AppResult<()>;
}
