pub mod schedule;
pub mod service;
pub mod time_window;

pub use schedule::{check_conflict, is_available, AvailabilityVerdict};
pub use service::AvailabilityService;
pub use time_window::{day_of_week_in_range, overlaps, slots_overlap};
