//! Decision core for prison video-link bookings.
//!
//! Four pieces share one conceptual model of a booking, its time slots and
//! the roles entitled to act on it: the time-window evaluator, the weekly
//! room-schedule model, the access guards, and the notification routing
//! engine. Persistence, HTTP and delivery transport are collaborators
//! behind the traits in [`ports`].

pub mod config;
pub mod error;
pub mod models;
pub mod modules;
pub mod ports;

pub use error::{AppError, AppResult};
