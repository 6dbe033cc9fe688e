use tracing::debug;

use crate::models::TimeSlot;
use crate::modules::availability::schedule::{check_conflict, AvailabilityVerdict};
use crate::ports::{LocationAttributeLookup, OccupancyLookup};

/// Combines the occupancy and decoration lookups into a single verdict for a
/// proposed appointment slot. Stateless between calls; the occupancy
/// snapshot's isolation is the caller's responsibility.
pub struct AvailabilityService<O, L> {
    occupancy: O,
    locations: L,
}

impl<O, L> AvailabilityService<O, L>
where
    O: OccupancyLookup,
    L: LocationAttributeLookup,
{
    pub fn new(occupancy: O, locations: L) -> Self {
        AvailabilityService {
            occupancy,
            locations,
        }
    }

    pub fn verdict_for(
        &self,
        prison_code: &str,
        location_key: &str,
        proposed: &TimeSlot,
    ) -> AvailabilityVerdict {
        let attribute = self.locations.location_attribute(location_key);
        let occupied =
            self.occupancy
                .existing_occupancy(prison_code, location_key, proposed.date());
        let verdict = check_conflict(proposed, &occupied, attribute.as_ref());
        debug!(prison_code, location_key, ?verdict, "availability checked");
        verdict
    }
}
