use time::Time;

use crate::models::TimeSlot;

/// Half-open interval overlap: `[start_a, end_a)` against `[start_b, end_b)`.
/// Intervals that merely touch do not overlap, which is what allows
/// back-to-back bookings in the same room. Callers must have validated
/// `start <= end` for each interval.
pub fn overlaps(start_a: Time, end_a: Time, start_b: Time, end_b: Time) -> bool {
    !(end_a <= start_b || start_a >= end_b)
}

/// Slot-level overlap; slots on different dates never collide.
pub fn slots_overlap(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.date() == b.date() && overlaps(a.start_time(), a.end_time(), b.start_time(), b.end_time())
}

/// Inclusive ISO day-of-week range test, Monday = 1. Values outside 1..=7
/// must be rejected by validation before reaching this function.
pub fn day_of_week_in_range(day: u8, from: u8, to: u8) -> bool {
    from <= day && day <= to
}
