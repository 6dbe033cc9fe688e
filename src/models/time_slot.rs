use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::error::{AppError, AppResult};

/// A half-open interval `[start_time, end_time)` on a single day.
/// Immutable once constructed; `start_time < end_time` is enforced by the
/// constructor so downstream overlap checks never see a degenerate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    date: Date,
    start_time: Time,
    end_time: Time,
}

impl TimeSlot {
    pub fn new(date: Date, start_time: Time, end_time: Time) -> AppResult<Self> {
        if start_time >= end_time {
            return Err(AppError::Validation(format!(
                "slot start time {} must be before end time {}",
                start_time, end_time
            )));
        }
        Ok(TimeSlot {
            date,
            start_time,
            end_time,
        })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn start_time(&self) -> Time {
        self.start_time
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }

    /// ISO day of week, Monday = 1 through Sunday = 7.
    pub fn day_of_week(&self) -> u8 {
        self.date.weekday().number_from_monday()
    }
}
